//! Demo configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use geoquiz_reveal::config::RevealConfig;

use crate::error::AppError;

/// Everything the demo run needs besides the scenario itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Optional JSON scenario replacing the built-in one.
    pub scenario_path: Option<PathBuf>,
    /// Reveal timings and camera constants.
    pub reveal: RevealConfig,
}

impl DemoConfig {
    /// Reads `GEOQUIZ_SCENARIO`, `GEOQUIZ_QUESTIONS_PER_GAME` and
    /// `GEOQUIZ_MOUNT_SETTLE_MS` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut reveal = RevealConfig::default();
        if let Some(questions) = parse_var(&lookup, "GEOQUIZ_QUESTIONS_PER_GAME")? {
            reveal.questions_per_game = questions;
        }
        if let Some(settle) = parse_var(&lookup, "GEOQUIZ_MOUNT_SETTLE_MS")? {
            reveal.mount_settle_ms = settle;
        }

        Ok(Self {
            scenario_path: lookup("GEOQUIZ_SCENARIO")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            reveal,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{key} must be a valid number: {e}")))
        })
        .transpose()
}
