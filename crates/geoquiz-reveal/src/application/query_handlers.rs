//! Query handlers for the reveal context.
//!
//! Builds the read-only view the host screen renders from.

use serde::Serialize;

use crate::config::RevealConfig;
use crate::domain::aggregates::{RevealPhase, RevealRound};
use crate::domain::markers::Marker;

/// Label of the reveal action while idle.
pub const REVEAL_LABEL: &str = "Reveal Answers";
/// Label of the reveal action while a reveal is in flight.
pub const REVEALING_LABEL: &str = "Revealing Answers...";
/// Label of the advance action between questions.
pub const NEXT_QUESTION_LABEL: &str = "Next Question";
/// Label of the advance action after the final question.
pub const COMPLETE_GAME_LABEL: &str = "Complete Game";

/// The reveal action offered to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealAction {
    /// Button text.
    pub label: &'static str,
    /// Whether the button accepts clicks.
    pub enabled: bool,
}

/// Read-only view of the host screen's reveal state.
#[derive(Debug, Clone, Serialize)]
pub struct HostView {
    /// One-based index of the active question.
    pub question_index: u32,
    /// Current phase.
    pub phase: RevealPhase,
    /// Markers to draw, truth first.
    pub markers: Vec<Marker>,
    /// Error to show, if any.
    pub error: Option<String>,
    /// Players that have answered.
    pub answered_count: usize,
    /// Players in the game.
    pub player_count: usize,
    /// The reveal action, if offered.
    pub reveal_action: Option<RevealAction>,
    /// Label of the advance action, if offered.
    pub advance_label: Option<&'static str>,
    /// Whether the map accepts pan/zoom input.
    pub map_interactive: bool,
    /// Whether marker labels are drawn.
    pub show_marker_labels: bool,
    /// Whether the final question has been revealed.
    pub game_complete: bool,
    /// Identity of the mounted map surface; changes on every remount.
    pub map_key: u64,
}

/// Builds the host view for `round`.
#[must_use]
pub fn host_view(round: &RevealRound, config: &RevealConfig) -> HostView {
    let phase = round.phase();
    let snapshot = round.snapshot();
    let question_index = snapshot.map_or(0, |s| s.question_index);
    let is_last = config.is_last_question(question_index);
    let published = round.markers_published();

    let reveal_action = (round.gate_open() && !published).then(|| {
        let revealing = phase == RevealPhase::Revealing;
        RevealAction {
            label: if revealing { REVEALING_LABEL } else { REVEAL_LABEL },
            enabled: !revealing,
        }
    });

    let advance_label = (phase == RevealPhase::Complete).then_some(if is_last {
        COMPLETE_GAME_LABEL
    } else {
        NEXT_QUESTION_LABEL
    });

    HostView {
        question_index,
        phase,
        markers: round.markers().to_vec(),
        error: round.error().map(str::to_owned),
        answered_count: snapshot.map_or(0, |s| s.answered_count()),
        player_count: snapshot.map_or(0, |s| s.players.len()),
        reveal_action,
        advance_label,
        map_interactive: phase != RevealPhase::Revealing,
        show_marker_labels: round.markers().len() > 1,
        game_complete: is_last && published,
        map_key: round.mount_key(),
    }
}
