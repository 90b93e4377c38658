use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: u8 = 4;
pub const WIN_SCORE: i32 = 1000;

/// One ply per cell; deeper searches cannot find anything new.
pub const MAX_SUPPORTED_DEPTH: u8 = 42;
pub const MAX_WIN_SCORE: i32 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched below each candidate move.
    pub max_depth: u8,
    /// Score of a decided position.
    pub win_score: i32,
    /// Play a column that wins on the spot before running the full search.
    pub take_immediate_wins: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            win_score: WIN_SCORE,
            take_immediate_wins: true,
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json_str)?;
        Ok(config.validated())
    }

    #[must_use]
    pub const fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Clamps values the search cannot work with.
    #[must_use]
    pub fn validated(mut self) -> Self {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            log::warn!(
                "max_depth {} exceeds {MAX_SUPPORTED_DEPTH}, clamping",
                self.max_depth
            );
            self.max_depth = MAX_SUPPORTED_DEPTH;
        }
        if !(1..=MAX_WIN_SCORE).contains(&self.win_score) {
            log::warn!(
                "win_score {} outside 1..={MAX_WIN_SCORE}, using {WIN_SCORE}",
                self.win_score
            );
            self.win_score = WIN_SCORE;
        }
        self
    }
}
