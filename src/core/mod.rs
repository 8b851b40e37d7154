//! Core engine types: items, RNG, configuration.
//!
//! These are the building blocks shared by the puzzle catalog and the
//! session state machine.

pub mod config;
pub mod item;
pub mod rng;

pub use config::{ConfigError, SessionConfig, GROUP_SIZE, MAX_MISTAKES};
pub use item::Item;
pub use rng::GameRng;
