//! Game-state snapshots the demo plays through.

use std::path::Path;

use geoquiz_core::game::{Answer, GameSnapshot, Player, Question};
use geoquiz_core::geo::Coordinate;
use uuid::Uuid;

use crate::error::AppError;

/// Location of the Eiffel Tower.
pub const EIFFEL_TOWER: Coordinate = Coordinate::new(2.2945, 48.8584);

/// The built-in round: the Eiffel Tower question with three players who
/// have all answered, guessing Paris, Lyon and London.
#[must_use]
pub fn eiffel_tower() -> GameSnapshot {
    let game_id = Uuid::now_v7();
    let guesses = [
        ("AMY", Coordinate::new(2.3522, 48.8566), 4.6, 995),
        ("BOB", Coordinate::new(4.8357, 45.7640), 392.0, 608),
        ("CAT", Coordinate::new(-0.1276, 51.5072), 340.0, 660),
    ];

    let mut players = Vec::with_capacity(guesses.len());
    let mut answers = Vec::with_capacity(guesses.len());
    for (initials, guess, distance_km, score) in guesses {
        let player = Player {
            id: Uuid::now_v7(),
            initials: initials.to_owned(),
            game_id,
            score,
            has_answered: true,
            last_score: Some(score),
        };
        answers.push(Answer {
            id: Uuid::now_v7(),
            player_id: player.id,
            game_id,
            question_id: 1,
            guess,
            distance_km,
            score,
        });
        players.push(player);
    }

    GameSnapshot {
        question_index: 1,
        question: Question {
            id: 1,
            text: "Where is the Eiffel Tower?".to_owned(),
            location: EIFFEL_TOWER,
            image: None,
            hint: Some("It was built for the 1889 World's Fair.".to_owned()),
        },
        players,
        answers,
    }
}

/// Reads a snapshot from a JSON file.
///
/// # Errors
///
/// Returns `AppError::Io` if the file cannot be read and
/// `AppError::Scenario` if it is not a valid snapshot.
pub async fn load(path: &Path) -> Result<GameSnapshot, AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
