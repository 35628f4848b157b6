//! GeoQuiz demo: plays one question round through the reveal engine.
//!
//! The round is observed and revealed against a camera surface that only
//! logs. The resulting host view is the demo's output.

pub mod config;
pub mod error;
pub mod scenario;
pub mod surface;

use std::sync::Arc;

use geoquiz_core::clock::{Clock, SystemClock};
use geoquiz_reveal::application::choreographer::RevealChoreographer;
use geoquiz_reveal::application::query_handlers::HostView;
use tracing::info;

use crate::config::DemoConfig;
use crate::error::AppError;
use crate::surface::{LocalCommitter, LoggingAdvancer, TracingSurfaceFactory};

/// Runs the configured round on the system clock.
///
/// # Errors
///
/// Returns `AppError` if the scenario cannot be loaded or the reveal fails.
pub async fn run(config: DemoConfig) -> Result<HostView, AppError> {
    run_with_clock(config, Arc::new(SystemClock)).await
}

/// Runs the configured round on `clock`.
///
/// # Errors
///
/// Returns `AppError` if the scenario cannot be loaded or the reveal fails.
pub async fn run_with_clock(
    config: DemoConfig,
    clock: Arc<dyn Clock>,
) -> Result<HostView, AppError> {
    let snapshot = match &config.scenario_path {
        Some(path) => {
            info!(path = %path.display(), "loading scenario");
            scenario::load(path).await?
        }
        None => scenario::eiffel_tower(),
    };

    let choreographer = RevealChoreographer::new(
        config.reveal,
        clock,
        Arc::new(TracingSurfaceFactory),
        Arc::new(LocalCommitter),
        Arc::new(LoggingAdvancer),
    );

    choreographer.observe(snapshot).await;
    choreographer.trigger_reveal().await?;
    let view = choreographer.host_view();

    for event in choreographer.drain_events() {
        info!(
            event_type = event.event_type(),
            event_id = %event.metadata.event_id,
            "reveal event"
        );
    }

    Ok(view)
}
