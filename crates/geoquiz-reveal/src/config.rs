//! Reveal timing and camera configuration.

use std::time::Duration;

use geoquiz_core::geo::Coordinate;
use serde::Deserialize;

/// Timings, zoom levels, and padding used by the reveal and reset
/// sequences. Durations are in milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Grace period after a remount before the first camera command.
    pub mount_settle_ms: u64,
    /// Zoom level of the reset zoom-out.
    pub reset_zoom_out_zoom: f64,
    /// Length of the reset zoom-out.
    pub reset_zoom_out_ms: u64,
    /// Center of the neutral world view.
    pub overview_center: Coordinate,
    /// Zoom level of the neutral world view.
    pub overview_zoom: f64,
    /// Length of the transition back to the world view.
    pub overview_ms: u64,
    /// Close zoom used when flying to the truth coordinate.
    pub truth_zoom: f64,
    /// Length of the fly to the truth coordinate.
    pub truth_fly_ms: u64,
    /// Uniform padding, in pixels, around fitted bounds.
    pub fit_padding_px: u32,
    /// Length of the bounds-fit transition.
    pub fit_ms: u64,
    /// Zoom used when a bounds-fit collapses to a single point.
    pub single_point_zoom: f64,
    /// Number of questions in a game; the last one completes the game.
    pub questions_per_game: u32,
}

impl RevealConfig {
    /// The settle delay as a `Duration`.
    #[must_use]
    pub fn mount_settle(&self) -> Duration {
        Duration::from_millis(self.mount_settle_ms)
    }

    /// Returns `true` if `question_index` is the final question.
    #[must_use]
    pub fn is_last_question(&self, question_index: u32) -> bool {
        question_index == self.questions_per_game
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            mount_settle_ms: 100,
            reset_zoom_out_zoom: 0.0,
            reset_zoom_out_ms: 1000,
            overview_center: Coordinate::new(0.0, 20.0),
            overview_zoom: 1.5,
            overview_ms: 1000,
            truth_zoom: 5.0,
            truth_fly_ms: 2000,
            fit_padding_px: 50,
            fit_ms: 2000,
            single_point_zoom: 5.0,
            questions_per_game: 5,
        }
    }
}
