//! Stand-ins for the map surface and the game-state provider that only
//! log what they are asked to do.

use std::sync::Arc;

use async_trait::async_trait;
use geoquiz_core::camera::{CameraSurface, FitBoundsOptions, FlyToOptions, SurfaceFactory};
use geoquiz_core::collaborator::{QuestionAdvancer, RevealCommitter};
use geoquiz_core::error::DomainError;
use geoquiz_core::geo::Bounds;
use tracing::info;

/// A map surface that logs each camera animation it is asked to start.
#[derive(Debug)]
pub struct TracingCameraSurface {
    mount_key: u64,
}

impl CameraSurface for TracingCameraSurface {
    fn fly_to(&self, options: &FlyToOptions) {
        info!(
            mount_key = self.mount_key,
            center = ?options.center,
            zoom = ?options.zoom,
            duration = ?options.duration,
            "camera fly_to"
        );
    }

    fn fit_bounds(&self, bounds: &Bounds, options: &FitBoundsOptions) {
        info!(
            mount_key = self.mount_key,
            southwest = ?bounds.southwest,
            northeast = ?bounds.northeast,
            padding = options.padding.top,
            duration = ?options.duration,
            "camera fit_bounds"
        );
    }
}

/// Builds a `TracingCameraSurface` per mount.
#[derive(Debug, Default)]
pub struct TracingSurfaceFactory;

impl SurfaceFactory for TracingSurfaceFactory {
    fn mount(&self, mount_key: u64) -> Arc<dyn CameraSurface> {
        info!(mount_key, "map surface mounted");
        Arc::new(TracingCameraSurface { mount_key })
    }
}

/// Accepts every reveal commit.
#[derive(Debug, Default)]
pub struct LocalCommitter;

#[async_trait]
impl RevealCommitter for LocalCommitter {
    async fn commit_reveal(&self) -> Result<(), DomainError> {
        info!("reveal committed");
        Ok(())
    }
}

/// Logs advance requests; the demo plays a single question.
#[derive(Debug, Default)]
pub struct LoggingAdvancer;

impl QuestionAdvancer for LoggingAdvancer {
    fn advance(&self) {
        info!("next question requested");
    }
}
