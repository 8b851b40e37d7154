//! # rust-connections
//!
//! Session engine for daily "group the items" puzzles: a board of items
//! hides K categories of four, and the player finds them one guess at a
//! time within a bounded number of mistakes.
//!
//! ## Design Principles
//!
//! 1. **Explicit instances**: A `PuzzleCatalog` and a `GameSession` are
//!    plain values owned by whoever drives the UI. No global state.
//!
//! 2. **Push-based**: Every operation returns the `SessionEvent`s it
//!    produced, so views re-render from events.
//!
//! 3. **Deterministic**: Given a seed, board order is reproducible.
//!    Shuffles are Fisher-Yates over a ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Items, RNG, configuration and constants
//! - `puzzles`: Puzzle definitions, validation, data source, catalog
//! - `session`: Group matching, the session state machine, the controller

pub mod core;
pub mod puzzles;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameRng, Item, SessionConfig, GROUP_SIZE, MAX_MISTAKES};

pub use crate::puzzles::{
    CatalogError, Group, JsonPuzzleSource, Puzzle, PuzzleCatalog, PuzzleError, PuzzleId,
    PuzzleSource, RawGroup, RawPuzzle, RawPuzzleSet,
};

pub use crate::session::{
    match_group, ControllerError, GameController, GameSession, Intent, SessionError,
    SessionEvent, SessionEvents, SessionObserver, SessionStatus, SolvedGroup,
};
