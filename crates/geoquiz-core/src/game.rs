//! Game-state snapshot types.
//!
//! The game-state provider owns these records; the reveal engine only ever
//! sees immutable snapshots of them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::Coordinate;

/// A quiz question tied to a real-world location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier; answers link to it.
    pub id: u32,
    /// Display text.
    pub text: String,
    /// The truth coordinate.
    pub location: Coordinate,
    /// Optional image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Optional hint shown to players.
    #[serde(default)]
    pub hint: Option<String>,
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player identifier.
    pub id: Uuid,
    /// Display initials.
    pub initials: String,
    /// Owning game.
    pub game_id: Uuid,
    /// Cumulative score.
    pub score: u32,
    /// Whether the player has answered the active question.
    pub has_answered: bool,
    /// Points gained in the last scored round.
    #[serde(default)]
    pub last_score: Option<u32>,
}

/// A player's guess for one question, scored by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Answer identifier.
    pub id: Uuid,
    /// The player who answered.
    pub player_id: Uuid,
    /// Owning game.
    pub game_id: Uuid,
    /// The question this answer responds to.
    pub question_id: u32,
    /// The guessed coordinate.
    pub guess: Coordinate,
    /// Distance from the truth coordinate, in kilometres.
    pub distance_km: f64,
    /// Points awarded for this answer.
    pub score: u32,
}

/// Everything the reveal engine reads from the game-state provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// One-based position of the active question in the game.
    pub question_index: u32,
    /// The active question.
    pub question: Question,
    /// The current roster.
    pub players: Vec<Player>,
    /// The full answer log, across all questions.
    pub answers: Vec<Answer>,
}

impl GameSnapshot {
    /// Number of players that have answered the active question.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.players.iter().filter(|p| p.has_answered).count()
    }

    /// The reveal gate: at least one player, and every player has answered.
    #[must_use]
    pub fn all_players_answered(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| p.has_answered)
    }

    /// Looks up a player by identifier.
    #[must_use]
    pub fn player(&self, player_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}
