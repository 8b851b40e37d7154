//! Controller: the thin layer between a view and the engine.
//!
//! A view sends [`Intent`]s. The controller turns them into session
//! operations, forwards every resulting event to its observers, and
//! returns the same events to the caller.
//!
//! ## Policies
//!
//! - The newest puzzle is loaded on [`GameController::start`]
//! - Switching puzzles or resetting replaces the session wholesale
//! - Infinite mode is a player preference and survives puzzle switches
//! - Shuffling a finished board is refused
//! - Each session gets a fork of the controller's RNG, so a seeded
//!   controller replays identically

use thiserror::Error;

use crate::core::{GameRng, Item, SessionConfig};
use crate::puzzles::{CatalogError, PuzzleCatalog, PuzzleId};

use super::event::{SessionEvent, SessionEvents};
use super::state::{GameSession, SessionError, SessionStatus};

/// Something a player asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Click an item: select it, or deselect it if already selected.
    Select(Item),
    /// Submit the current selection.
    Submit,
    /// Reorder the board.
    Shuffle,
    /// Flip infinite mode.
    ToggleInfiniteMode,
    /// Load a different puzzle.
    SwitchPuzzle(PuzzleId),
    /// Restart the current puzzle with a fresh board.
    Reset,
}

/// Receives session events as they happen.
pub trait SessionObserver {
    /// Called once per event, in emission order.
    fn on_event(&mut self, puzzle: &PuzzleId, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&PuzzleId, &SessionEvent),
{
    fn on_event(&mut self, puzzle: &PuzzleId, event: &SessionEvent) {
        self(puzzle, event);
    }
}

/// Errors surfaced to the view.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("no puzzle is loaded")]
    NoActiveSession,
    #[error("the session is over ({0:?})")]
    SessionFinished(SessionStatus),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Owns the catalog and the active session and drives both from intents.
///
/// ```
/// use rust_connections::core::{Item, SessionConfig};
/// use rust_connections::puzzles::PuzzleCatalog;
/// use rust_connections::session::{GameController, Intent, SessionStatus};
///
/// let catalog = PuzzleCatalog::from_json(r#"{
///     "2025-07-14": { "groups": { "Letters": { "level": 1, "items": ["A", "B", "C", "D"] } } }
/// }"#).unwrap();
///
/// let mut controller = GameController::new(catalog, SessionConfig::default().with_seed(7));
/// controller.start().unwrap();
///
/// for name in ["A", "B", "C", "D"] {
///     controller.dispatch(Intent::Select(Item::from(name))).unwrap();
/// }
/// controller.dispatch(Intent::Submit).unwrap();
///
/// assert_eq!(controller.session().unwrap().status(), SessionStatus::Won);
/// ```
pub struct GameController {
    catalog: PuzzleCatalog,
    config: SessionConfig,
    rng: GameRng,
    session: Option<GameSession>,
    infinite_mode: bool,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameController {
    /// Create a controller. No puzzle is loaded until [`start`](Self::start)
    /// or [`load`](Self::load).
    #[must_use]
    pub fn new(catalog: PuzzleCatalog, config: SessionConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let infinite_mode = config.infinite_mode;
        Self {
            catalog,
            config,
            rng,
            session: None,
            infinite_mode,
            observers: Vec::new(),
        }
    }

    /// Register an observer for every future event.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The catalog backing this controller.
    #[must_use]
    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    /// The active session, if a puzzle is loaded.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Load the newest puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if the catalog has no puzzles.
    pub fn start(&mut self) -> Result<SessionEvents, ControllerError> {
        let latest = self.catalog.latest()?.clone();
        self.load(&latest)
    }

    /// Replace the active session with a fresh one for `id`.
    ///
    /// On failure the previous session stays active.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown ID, or a
    /// [`SessionError`] if the session cannot be created.
    pub fn load(&mut self, id: &PuzzleId) -> Result<SessionEvents, ControllerError> {
        let puzzle = self.catalog.get(id)?;
        let mut config = self.config.clone().with_infinite_mode(self.infinite_mode);
        // The controller RNG already carries the seed; each session gets a fork.
        config.seed = None;
        let rng = self.rng.fork();
        let seed = rng.seed();
        let session = GameSession::new(puzzle, &config, rng)?;

        log::debug!(
            "session started for puzzle {} ({} items, seed {})",
            id,
            session.board().len(),
            seed
        );

        let events: SessionEvents = smallvec::smallvec![session.initialized_event()];
        self.session = Some(session);
        self.notify(&events);
        Ok(events)
    }

    /// Apply one intent.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::NoActiveSession`] before a puzzle is
    /// loaded, [`ControllerError::SessionFinished`] when shuffling a
    /// finished board, and passes engine errors through.
    pub fn dispatch(&mut self, intent: Intent) -> Result<SessionEvents, ControllerError> {
        let events = match intent {
            Intent::SwitchPuzzle(id) => return self.load(&id),
            Intent::Reset => {
                let id = self.active_mut()?.puzzle().id().clone();
                return self.load(&id);
            }
            Intent::Select(item) => self.active_mut()?.toggle_select(&item),
            Intent::Submit => {
                let session = self.active_mut()?;
                let events = session.submit_guess()?;
                log_outcome(session, &events);
                events
            }
            Intent::Shuffle => {
                let session = self.active_mut()?;
                if session.is_finished() {
                    return Err(ControllerError::SessionFinished(session.status()));
                }
                session.shuffle_board()
            }
            Intent::ToggleInfiniteMode => {
                let session = self.active_mut()?;
                let events = session.toggle_infinite_mode();
                let enabled = session.is_infinite_mode();
                self.infinite_mode = enabled;
                events
            }
        };

        self.notify(&events);
        Ok(events)
    }

    fn active_mut(&mut self) -> Result<&mut GameSession, ControllerError> {
        self.session.as_mut().ok_or(ControllerError::NoActiveSession)
    }

    fn notify(&mut self, events: &[SessionEvent]) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let id = session.puzzle().id();
        for observer in &mut self.observers {
            for event in events {
                observer.on_event(id, event);
            }
        }
    }
}

fn log_outcome(session: &GameSession, events: &[SessionEvent]) {
    let id = session.puzzle().id();
    for event in events {
        match event {
            SessionEvent::CorrectGuess(solved) => {
                log::debug!("puzzle {id}: solved {:?}", solved.group.name);
            }
            SessionEvent::Victory => {
                log::debug!("puzzle {id}: won with {} mistakes", session.mistakes());
            }
            SessionEvent::Defeat => log::debug!("puzzle {id}: lost"),
            _ => {}
        }
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("puzzles", &self.catalog.len())
            .field("session", &self.session)
            .field("infinite_mode", &self.infinite_mode)
            .field("observers", &self.observers.len())
            .finish()
    }
}
