//! Domain events for the reveal context.

use chrono::{DateTime, Utc};
use geoquiz_core::camera::CameraCommand;
use serde::Serialize;
use uuid::Uuid;

use super::aggregates::RevealPhase;

/// Metadata attached to every reveal event.
#[derive(Debug, Clone, Serialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// The question index the round was on when the event occurred.
    pub question_index: u32,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

/// Emitted when a new active question resets the round.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionReset {
    /// The new active question.
    pub question_index: u32,
    /// Key of the freshly mounted map surface.
    pub mount_key: u64,
}

/// Emitted on every phase transition.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseChanged {
    /// Phase before the transition.
    pub from: RevealPhase,
    /// Phase after the transition.
    pub to: RevealPhase,
}

/// Emitted once the reveal markers become visible.
#[derive(Debug, Clone, Serialize)]
pub struct MarkersPublished {
    /// Number of markers, truth marker included.
    pub count: usize,
}

/// Emitted when an error is shown to the host.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorSurfaced {
    /// The user-visible message.
    pub message: String,
}

/// Event payload variants for the reveal context.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RevealEventKind {
    /// The active question changed.
    QuestionReset(QuestionReset),
    /// The phase changed.
    PhaseChanged(PhaseChanged),
    /// A camera command reached the map surface and completed.
    CameraCommandIssued(CameraCommand),
    /// Reveal markers were published.
    MarkersPublished(MarkersPublished),
    /// An error was surfaced.
    ErrorSurfaced(ErrorSurfaced),
    /// The host asked for the next question.
    AdvanceRequested,
}

/// Domain event envelope for the reveal context.
#[derive(Debug, Clone, Serialize)]
pub struct RevealEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: RevealEventKind,
}

impl RevealEvent {
    /// Returns the event type name (for logging).
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match &self.kind {
            RevealEventKind::QuestionReset(_) => "reveal.question_reset",
            RevealEventKind::PhaseChanged(_) => "reveal.phase_changed",
            RevealEventKind::CameraCommandIssued(_) => "reveal.camera_command_issued",
            RevealEventKind::MarkersPublished(_) => "reveal.markers_published",
            RevealEventKind::ErrorSurfaced(_) => "reveal.error_surfaced",
            RevealEventKind::AdvanceRequested => "reveal.advance_requested",
        }
    }
}
