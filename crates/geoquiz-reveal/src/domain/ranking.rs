//! Answer ranking for the active question.

use geoquiz_core::game::Answer;

/// Returns the answers to `question_id`, highest score first.
///
/// The sort is stable, so equal scores keep their order from the answer log.
#[must_use]
pub fn rank_answers(answers: &[Answer], question_id: u32) -> Vec<Answer> {
    let mut ranked: Vec<Answer> = answers
        .iter()
        .filter(|a| a.question_id == question_id)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
