//! Quiz configuration sourced from environment variables.

use std::env;
use std::time::Duration;

use crate::domain::layout::RowMetrics;
use crate::domain::rules::{
    CELEBRATION_DURATION_MS, HIGHLIGHT_DURATION_MS, ITEM_COUNT, ROW_GAP, ROW_HEIGHT,
};
use crate::error::EngineError;

/// Runtime configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Rendered row height in layout units.
    pub row_height: u32,
    /// Gap between rows in layout units.
    pub row_gap: u32,
    /// Expected number of rows; must match the reference sequence length.
    pub item_count: usize,
    /// How long the correctness highlight stays up after a check.
    pub highlight_duration: Duration,
    /// How long the celebration screen shows before returning to start.
    pub celebration_duration: Duration,
}

impl QuizConfig {
    /// Build a config from `QUIZ_*` environment variables, falling back to
    /// the fixed defaults for anything unset.
    pub fn from_env() -> Result<Self, EngineError> {
        let config = Self {
            row_height: var_parsed("QUIZ_ROW_HEIGHT", ROW_HEIGHT)?,
            row_gap: var_parsed("QUIZ_ROW_GAP", ROW_GAP)?,
            item_count: var_parsed("QUIZ_ITEM_COUNT", ITEM_COUNT)?,
            highlight_duration: Duration::from_millis(var_parsed(
                "QUIZ_HIGHLIGHT_MS",
                HIGHLIGHT_DURATION_MS,
            )?),
            celebration_duration: Duration::from_millis(var_parsed(
                "QUIZ_CELEBRATION_MS",
                CELEBRATION_DURATION_MS,
            )?),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.row_height == 0 {
            return Err(EngineError::config("row height must be positive"));
        }
        if self.item_count == 0 {
            return Err(EngineError::config("item count must be positive"));
        }
        Ok(())
    }

    pub fn metrics(&self) -> RowMetrics {
        RowMetrics {
            row_height: self.row_height,
            row_gap: self.row_gap,
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            row_gap: ROW_GAP,
            item_count: ITEM_COUNT,
            highlight_duration: Duration::from_millis(HIGHLIGHT_DURATION_MS),
            celebration_duration: Duration::from_millis(CELEBRATION_DURATION_MS),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default` when
/// the variable is unset. A set-but-unparseable value is a config error.
fn var_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, EngineError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| EngineError::config(format!("{name} must be an integer, got {raw:?}"))),
        Err(_) => Ok(default),
    }
}
