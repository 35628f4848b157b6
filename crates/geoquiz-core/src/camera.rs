//! Camera command values and the map surface they are issued against.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::geo::{Bounds, Coordinate};

/// Options for an animated center/zoom transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlyToOptions {
    /// Target center; `None` keeps the current center.
    pub center: Option<Coordinate>,
    /// Target zoom level; `None` keeps the current zoom.
    pub zoom: Option<f64>,
    /// Animation length.
    pub duration: Duration,
}

/// Screen-space padding, in pixels, kept clear around fitted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    /// Top edge.
    pub top: u32,
    /// Bottom edge.
    pub bottom: u32,
    /// Left edge.
    pub left: u32,
    /// Right edge.
    pub right: u32,
}

impl Padding {
    /// The same padding on all four sides.
    #[must_use]
    pub const fn uniform(pixels: u32) -> Self {
        Self {
            top: pixels,
            bottom: pixels,
            left: pixels,
            right: pixels,
        }
    }
}

/// Options for an animated bounds-fit transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitBoundsOptions {
    /// Padding around the fitted region.
    pub padding: Padding,
    /// Animation length.
    pub duration: Duration,
}

/// A request to move the visible map region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraCommand {
    /// Animated center/zoom transition.
    FlyTo(FlyToOptions),
    /// Animated transition that makes `bounds` fully visible.
    FitBounds {
        /// Region to show.
        bounds: Bounds,
        /// Padding and duration.
        options: FitBoundsOptions,
    },
}

impl CameraCommand {
    /// The command type name (for logging).
    #[must_use]
    pub fn command_type(&self) -> &'static str {
        match self {
            Self::FlyTo(_) => "camera.fly_to",
            Self::FitBounds { .. } => "camera.fit_bounds",
        }
    }

    /// How long the animation runs before the command counts as complete.
    #[must_use]
    pub fn duration(&self) -> Duration {
        match self {
            Self::FlyTo(options) => options.duration,
            Self::FitBounds { options, .. } => options.duration,
        }
    }
}

/// A mounted map surface that can animate its camera.
///
/// Both operations start the animation and return immediately; completion
/// is measured by the caller against the command's duration.
pub trait CameraSurface: Send + Sync {
    /// Starts a center/zoom transition.
    fn fly_to(&self, options: &FlyToOptions);

    /// Starts a bounds-fit transition.
    fn fit_bounds(&self, bounds: &Bounds, options: &FitBoundsOptions);
}

/// Builds a fresh map surface; each call is a full reconstruction.
pub trait SurfaceFactory: Send + Sync {
    /// Mounts a new surface. `mount_key` increases with every remount.
    fn mount(&self, mount_key: u64) -> Arc<dyn CameraSurface>;
}
