//! Camera commands issued by the reveal and reset sequences.

use std::time::Duration;

use geoquiz_core::camera::{CameraCommand, FitBoundsOptions, FlyToOptions, Padding};
use geoquiz_core::geo::{Bounds, Coordinate};

use crate::config::RevealConfig;

/// First reset step: zoom out in place to a world overview.
#[must_use]
pub fn reset_zoom_out(config: &RevealConfig) -> CameraCommand {
    CameraCommand::FlyTo(FlyToOptions {
        center: None,
        zoom: Some(config.reset_zoom_out_zoom),
        duration: Duration::from_millis(config.reset_zoom_out_ms),
    })
}

/// Second reset step: settle on the neutral world-centered view.
#[must_use]
pub fn reset_overview(config: &RevealConfig) -> CameraCommand {
    CameraCommand::FlyTo(FlyToOptions {
        center: Some(config.overview_center),
        zoom: Some(config.overview_zoom),
        duration: Duration::from_millis(config.overview_ms),
    })
}

/// Flies to the truth coordinate at the close reveal zoom.
#[must_use]
pub fn fly_to_truth(config: &RevealConfig, truth: Coordinate) -> CameraCommand {
    CameraCommand::FlyTo(FlyToOptions {
        center: Some(truth),
        zoom: Some(config.truth_zoom),
        duration: Duration::from_millis(config.truth_fly_ms),
    })
}

/// Fits the camera to `bounds` with uniform padding.
#[must_use]
pub fn fit_all(config: &RevealConfig, bounds: Bounds) -> CameraCommand {
    CameraCommand::FitBounds {
        bounds,
        options: FitBoundsOptions {
            padding: Padding::uniform(config.fit_padding_px),
            duration: Duration::from_millis(config.fit_ms),
        },
    }
}
