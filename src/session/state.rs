//! The puzzle session state machine.
//!
//! ## States
//!
//! `InProgress` → `Won` | `Lost`. Both outcomes are terminal: once reached,
//! selection, mistakes, and solved groups are frozen.
//!
//! ## Board
//!
//! The board holds the unsolved items in display order. Order is cosmetic
//! and can be reshuffled at any time; membership only changes when a
//! guess solves a group.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

use crate::core::{ConfigError, GameRng, Item, SessionConfig, GROUP_SIZE};
use crate::puzzles::{Group, Puzzle, PuzzleError};

use super::event::{SessionEvent, SessionEvents};
use super::matcher::match_group;

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    /// Check if no further moves are accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}

/// A solved group together with the order the player picked its items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedGroup {
    pub group: Group,
    pub guessed: Vec<Item>,
}

/// Errors reported by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("select {required} items before submitting (have {selected})")]
    IncompleteSelection { selected: usize, required: usize },
    #[error("session is over ({0:?})")]
    SessionOver(SessionStatus),
    #[error(transparent)]
    InvalidPuzzle(#[from] PuzzleError),
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// One attempt at one puzzle.
///
/// Cloning is cheap: the board and solved list are persistent vectors and
/// the puzzle is shared.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use rust_connections::core::{GameRng, Item, SessionConfig};
/// use rust_connections::puzzles::{Group, Puzzle, PuzzleId};
/// use rust_connections::session::{GameSession, SessionStatus};
///
/// let puzzle = Puzzle::new(
///     PuzzleId::new("2025-07-14"),
///     vec![Group::new("Letters", 1, ["A", "B", "C", "D"])],
/// )
/// .unwrap();
/// let mut session =
///     GameSession::new(Arc::new(puzzle), &SessionConfig::default(), GameRng::new(1)).unwrap();
///
/// for name in ["A", "B", "C", "D"] {
///     session.toggle_select(&Item::from(name));
/// }
/// session.submit_guess().unwrap();
/// assert_eq!(session.status(), SessionStatus::Won);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    puzzle: Arc<Puzzle>,
    board: Vector<Item>,
    selection: SmallVec<[Item; GROUP_SIZE]>,
    solved: Vector<SolvedGroup>,
    mistakes: u32,
    max_mistakes: u32,
    infinite_mode: bool,
    status: SessionStatus,
    rng: GameRng,
}

impl GameSession {
    /// Start a session: shuffle the full item universe onto the board and
    /// zero every counter.
    ///
    /// When `config.seed` is set it replaces `rng`, so the same config
    /// always deals the same board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidPuzzle`] if the puzzle breaks the
    /// partition rules, or [`SessionError::InvalidConfig`] for an unusable
    /// config. No session is created in either case.
    pub fn new(puzzle: Arc<Puzzle>, config: &SessionConfig, mut rng: GameRng) -> Result<Self, SessionError> {
        puzzle.validate()?;
        config.validate()?;

        if let Some(seed) = config.seed {
            rng = GameRng::new(seed);
        }
        let mut board: Vector<Item> = puzzle.universe().cloned().collect();
        rng.shuffle_vector(&mut board);

        Ok(Self {
            puzzle,
            board,
            selection: SmallVec::new(),
            solved: Vector::new(),
            mistakes: 0,
            max_mistakes: config.max_mistakes,
            infinite_mode: config.infinite_mode,
            status: SessionStatus::InProgress,
            rng,
        })
    }

    /// Event describing the freshly dealt board.
    #[must_use]
    pub fn initialized_event(&self) -> SessionEvent {
        SessionEvent::BoardInitialized {
            puzzle: self.puzzle.id().clone(),
            board: self.board.iter().cloned().collect(),
        }
    }

    // === Operations ===

    /// Select or deselect an item.
    ///
    /// Does nothing when the session is over, when the item is not on the
    /// board, or when selecting past [`GROUP_SIZE`].
    pub fn toggle_select(&mut self, item: &Item) -> SessionEvents {
        if self.status.is_terminal() || !self.board.contains(item) {
            return SessionEvents::new();
        }

        if let Some(pos) = self.selection.iter().position(|s| s == item) {
            let removed = self.selection.remove(pos);
            return smallvec![SessionEvent::ItemDeselected(removed)];
        }

        if self.selection.len() < GROUP_SIZE {
            self.selection.push(item.clone());
            return smallvec![SessionEvent::ItemSelected(item.clone())];
        }

        SessionEvents::new()
    }

    /// Check the current selection against the puzzle's groups.
    ///
    /// A match moves the group from the board to the solved list and
    /// clears the selection. A miss counts a mistake (outside infinite
    /// mode) and leaves the selection in place for adjustment.
    ///
    /// # Errors
    ///
    /// - [`SessionError::SessionOver`] if the session already ended
    /// - [`SessionError::IncompleteSelection`] unless exactly
    ///   [`GROUP_SIZE`] items are selected
    pub fn submit_guess(&mut self) -> Result<SessionEvents, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::SessionOver(self.status));
        }
        if self.selection.len() != GROUP_SIZE {
            return Err(SessionError::IncompleteSelection {
                selected: self.selection.len(),
                required: GROUP_SIZE,
            });
        }

        let mut events = SessionEvents::new();
        let matched = match_group(&self.selection, self.puzzle.groups()).map(|(_, g)| g.clone());

        match matched {
            Some(group) => {
                self.board.retain(|item| !group.contains(item));
                let solved = SolvedGroup {
                    group,
                    guessed: self.selection.drain(..).collect(),
                };

                self.solved.push_back(solved.clone());
                events.push(SessionEvent::CorrectGuess(solved));

                if self.solved.len() == self.puzzle.group_count() {
                    self.status = SessionStatus::Won;
                    events.push(SessionEvent::Victory);
                }
            }
            None => {
                events.push(SessionEvent::IncorrectGuess {
                    selection: self.selection.to_vec(),
                });

                if !self.infinite_mode {
                    self.mistakes += 1;
                    events.push(SessionEvent::MistakesChanged {
                        mistakes: self.mistakes,
                        remaining: self.remaining_mistakes(),
                    });

                    if self.mistakes >= self.max_mistakes {
                        self.status = SessionStatus::Lost;
                        events.push(SessionEvent::Defeat);
                    }
                }
            }
        }

        self.debug_check_invariants();
        Ok(events)
    }

    /// Flip infinite mode.
    ///
    /// Has no effect on mistakes already counted and does not revive a
    /// lost session.
    pub fn toggle_infinite_mode(&mut self) -> SessionEvents {
        self.infinite_mode = !self.infinite_mode;
        smallvec![SessionEvent::InfiniteModeChanged {
            enabled: self.infinite_mode,
            remaining: self.remaining_mistakes(),
        }]
    }

    /// Reorder the board. Selection and counters are untouched.
    pub fn shuffle_board(&mut self) -> SessionEvents {
        self.rng.shuffle_vector(&mut self.board);
        smallvec![SessionEvent::BoardShuffled {
            board: self.board.iter().cloned().collect(),
        }]
    }

    // === Queries ===

    /// The puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Arc<Puzzle> {
        &self.puzzle
    }

    /// Unsolved items in display order.
    #[must_use]
    pub fn board(&self) -> &Vector<Item> {
        &self.board
    }

    /// Selected items in the order they were picked.
    #[must_use]
    pub fn selection(&self) -> &[Item] {
        &self.selection
    }

    /// Check if an item is selected.
    #[must_use]
    pub fn is_selected(&self, item: &Item) -> bool {
        self.selection.contains(item)
    }

    /// Solved groups in the order they were solved.
    #[must_use]
    pub fn solved_groups(&self) -> &Vector<SolvedGroup> {
        &self.solved
    }

    /// Wrong guesses counted so far.
    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Mistake allowance for this session.
    #[must_use]
    pub fn max_mistakes(&self) -> u32 {
        self.max_mistakes
    }

    /// Mistakes left before defeat, or `None` in infinite mode.
    #[must_use]
    pub fn remaining_mistakes(&self) -> Option<u32> {
        if self.infinite_mode {
            None
        } else {
            Some(self.max_mistakes.saturating_sub(self.mistakes))
        }
    }

    /// Check if infinite mode is on.
    #[must_use]
    pub fn is_infinite_mode(&self) -> bool {
        self.infinite_mode
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Check if the session has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    fn debug_check_invariants(&self) {
        debug_assert!(self.selection.len() <= GROUP_SIZE);
        debug_assert!(self.selection.iter().all(|item| self.board.contains(item)));
        debug_assert_eq!(
            self.solved.len() * GROUP_SIZE + self.board.len(),
            self.puzzle.universe_size()
        );
        debug_assert_eq!(
            self.status == SessionStatus::Won,
            self.solved.len() == self.puzzle.group_count()
        );
    }
}
