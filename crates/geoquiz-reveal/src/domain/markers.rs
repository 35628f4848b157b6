//! Map marker derivation.

use geoquiz_core::game::{Answer, Player, Question};
use geoquiz_core::geo::Coordinate;
use serde::Serialize;

use super::aggregates::RevealPhase;

/// Label of the truth marker.
pub const TRUTH_LABEL: &str = "Correct Location";

/// Initials shown when an answer's player is no longer in the roster.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Visual role of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerColor {
    /// The correct location.
    Truth,
    /// A player's guess.
    Guess,
}

/// A point drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Where the marker sits.
    pub position: Coordinate,
    /// Visual role.
    pub color: MarkerColor,
    /// Whether the pin is drawn filled.
    pub fill: bool,
    /// Optional text next to the pin.
    pub label: Option<String>,
}

/// Projects game state onto the markers visible in `phase`.
///
/// Nothing is shown before a reveal. During and after one, the truth
/// marker comes first, followed by one marker per ranked answer.
#[must_use]
pub fn derive_markers(
    question: &Question,
    players: &[Player],
    ranked: &[Answer],
    phase: RevealPhase,
) -> Vec<Marker> {
    if !matches!(phase, RevealPhase::Revealing | RevealPhase::Complete) {
        return Vec::new();
    }

    let truth = Marker {
        position: question.location,
        color: MarkerColor::Truth,
        fill: true,
        label: Some(TRUTH_LABEL.to_owned()),
    };

    std::iter::once(truth)
        .chain(ranked.iter().map(|answer| {
            let initials = players
                .iter()
                .find(|p| p.id == answer.player_id)
                .map_or(UNKNOWN_PLAYER, |p| p.initials.as_str());
            Marker {
                position: answer.guess,
                color: MarkerColor::Guess,
                fill: true,
                label: Some(format!("{initials} ({} pts)", answer.score)),
            }
        }))
        .collect()
}
