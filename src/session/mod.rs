//! Puzzle sessions: matching, events, the state machine, and the
//! controller that drives it from a view.
//!
//! ## Flow
//!
//! ```text
//! PuzzleCatalog ──get(id)──▶ GameSession::new ──▶ board dealt
//!        ▲                        │
//!        │                 toggle_select / submit_guess /
//!   SwitchPuzzle            shuffle_board / toggle_infinite_mode
//!        │                        │
//!   GameController ◀──SessionEvents──┘ ──▶ SessionObserver (view)
//! ```

mod controller;
mod event;
mod matcher;
mod state;

pub use controller::{ControllerError, GameController, Intent, SessionObserver};
pub use event::{SessionEvent, SessionEvents};
pub use matcher::match_group;
pub use state::{GameSession, SessionError, SessionStatus, SolvedGroup};
