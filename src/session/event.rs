//! Session events.
//!
//! Every session operation reports what changed as a list of
//! [`SessionEvent`]s. Views render from these instead of polling state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Item;
use crate::puzzles::PuzzleId;

use super::state::SolvedGroup;

/// Events emitted by one operation. Most operations emit one or two.
pub type SessionEvents = SmallVec<[SessionEvent; 4]>;

/// Something observable that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A fresh board was dealt.
    BoardInitialized {
        puzzle: PuzzleId,
        board: Vec<Item>,
    },

    /// An item joined the selection.
    ItemSelected(Item),

    /// An item left the selection.
    ItemDeselected(Item),

    /// The guess matched a group; its items left the board.
    CorrectGuess(SolvedGroup),

    /// The guess matched nothing. The selection is kept.
    IncorrectGuess { selection: Vec<Item> },

    /// The mistake counter moved.
    MistakesChanged {
        mistakes: u32,
        /// Mistakes left before defeat, `None` in infinite mode.
        remaining: Option<u32>,
    },

    /// Infinite mode was switched.
    InfiniteModeChanged {
        enabled: bool,
        remaining: Option<u32>,
    },

    /// Board order changed. Membership and selection did not.
    BoardShuffled { board: Vec<Item> },

    /// Every group is solved.
    Victory,

    /// The mistake allowance ran out.
    Defeat,
}

impl SessionEvent {
    /// Check if this event ends the session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionEvent::Victory | SessionEvent::Defeat)
    }
}
