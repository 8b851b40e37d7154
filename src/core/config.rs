//! Session configuration.
//!
//! The board shape is fixed: every group holds exactly [`GROUP_SIZE`]
//! items. What a host may tune is how forgiving a session is and where
//! its randomness comes from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of items in every group, and the size of a complete guess.
pub const GROUP_SIZE: usize = 4;

/// Wrong guesses allowed before a session is lost (outside infinite mode).
pub const MAX_MISTAKES: u32 = 4;

/// Errors raised when a [`SessionConfig`] is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_mistakes must be at least 1")]
    ZeroMistakes,
    #[error("invalid session config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-session tuning knobs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Wrong guesses that end the session when infinite mode is off.
    pub max_mistakes: u32,

    /// Whether new sessions start with infinite mode enabled.
    pub infinite_mode: bool,

    /// Seed for board shuffles. A session built with a seed always deals
    /// the same board. A controller seeds its own RNG with it instead and
    /// forks one per session. `None` leaves the caller's RNG in charge.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_mistakes: MAX_MISTAKES,
            infinite_mode: false,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can drive a session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMistakes`] if `max_mistakes` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_mistakes == 0 {
            return Err(ConfigError::ZeroMistakes);
        }
        Ok(())
    }

    /// Set the mistake allowance.
    #[must_use]
    pub fn with_max_mistakes(mut self, max_mistakes: u32) -> Self {
        self.max_mistakes = max_mistakes;
        self
    }

    /// Start sessions with infinite mode on or off.
    #[must_use]
    pub fn with_infinite_mode(mut self, enabled: bool) -> Self {
        self.infinite_mode = enabled;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
