//! Puzzle catalog for lookup by ID.
//!
//! The `PuzzleCatalog` holds every validated puzzle. It provides lookup
//! by [`PuzzleId`], newest-first listing, and "most recent" selection.
//! It never changes after construction.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{Puzzle, PuzzleError, PuzzleId};
use super::source::{JsonPuzzleSource, PuzzleSource, RawPuzzleSet};

/// Errors from building or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("puzzle {0} not found")]
    NotFound(PuzzleId),
    #[error("catalog has no puzzles")]
    Empty,
    #[error(transparent)]
    InvalidPuzzle(#[from] PuzzleError),
    #[error("failed to parse puzzle data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable collection of validated puzzles.
///
/// Puzzles are shared as `Arc<Puzzle>` so sessions can hold them without
/// borrowing the catalog.
///
/// ## Example
///
/// ```
/// use rust_connections::puzzles::{Group, Puzzle, PuzzleCatalog, PuzzleId};
///
/// let make = |id: &str| {
///     Puzzle::new(PuzzleId::new(id), vec![Group::new("G", 1, ["A", "B", "C", "D"])]).unwrap()
/// };
///
/// let catalog = PuzzleCatalog::new([make("2025-07-01"), make("2025-07-03"), make("2025-07-02")]);
///
/// assert_eq!(catalog.latest().unwrap().as_str(), "2025-07-03");
/// let ids: Vec<_> = catalog.list_ids_descending().map(PuzzleId::as_str).collect();
/// assert_eq!(ids, ["2025-07-03", "2025-07-02", "2025-07-01"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PuzzleCatalog {
    puzzles: FxHashMap<PuzzleId, Arc<Puzzle>>,
    /// IDs sorted newest first.
    order: Vec<PuzzleId>,
}

impl PuzzleCatalog {
    /// Build a catalog from already validated puzzles.
    ///
    /// A later puzzle with the same ID replaces an earlier one.
    pub fn new(puzzles: impl IntoIterator<Item = Puzzle>) -> Self {
        let puzzles: FxHashMap<PuzzleId, Arc<Puzzle>> = puzzles
            .into_iter()
            .map(|p| (p.id().clone(), Arc::new(p)))
            .collect();

        let mut order: Vec<PuzzleId> = puzzles.keys().cloned().collect();
        order.sort_unstable_by(|a, b| b.cmp(a));

        log::debug!("catalog built with {} puzzles", order.len());
        Self { puzzles, order }
    }

    /// Validate raw puzzle data and build a catalog.
    ///
    /// All or nothing: one invalid puzzle rejects the whole set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPuzzle`] for the first puzzle that
    /// fails validation.
    pub fn from_raw(raw: RawPuzzleSet) -> Result<Self, CatalogError> {
        let puzzles = raw
            .into_iter()
            .map(|(id, puzzle)| puzzle.into_puzzle(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(puzzles))
    }

    /// Load and validate every puzzle from a source.
    ///
    /// # Errors
    ///
    /// Returns the source's error, or [`CatalogError::InvalidPuzzle`].
    pub fn from_source<S>(source: &S) -> Result<Self, CatalogError>
    where
        S: PuzzleSource,
        CatalogError: From<S::Error>,
    {
        let raw = source.load_puzzles()?;
        Self::from_raw(raw)
    }

    /// Parse the JSON puzzle format and build a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] or [`CatalogError::InvalidPuzzle`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_source(&JsonPuzzleSource::new(json))
    }

    /// IDs in reverse lexicographic (newest first) order.
    ///
    /// Each call starts a fresh iteration.
    pub fn list_ids_descending(&self) -> impl Iterator<Item = &PuzzleId> + Clone + '_ {
        self.order.iter()
    }

    /// The most recent puzzle ID.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if there are no puzzles.
    pub fn latest(&self) -> Result<&PuzzleId, CatalogError> {
        self.list_ids_descending().next().ok_or(CatalogError::Empty)
    }

    /// Look up a puzzle by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the ID is unknown.
    pub fn get(&self, id: &PuzzleId) -> Result<Arc<Puzzle>, CatalogError> {
        self.puzzles
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// The most recent puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if there are no puzzles.
    pub fn get_latest(&self) -> Result<Arc<Puzzle>, CatalogError> {
        let id = self.latest()?;
        self.get(id)
    }

    /// Check if an ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &PuzzleId) -> bool {
        self.puzzles.contains_key(id)
    }

    /// Number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::Group;

    fn puzzle(id: &str) -> Puzzle {
        Puzzle::new(
            PuzzleId::new(id),
            vec![Group::new("Group", 1, ["A", "B", "C", "D"])],
        )
        .unwrap()
    }

    #[test]
    fn test_listing_is_restartable() {
        let catalog = PuzzleCatalog::new([puzzle("2025-01-02"), puzzle("2025-01-10"), puzzle("2024-12-30")]);

        let first: Vec<_> = catalog.list_ids_descending().cloned().collect();
        let second: Vec<_> = catalog.list_ids_descending().cloned().collect();

        assert_eq!(first, second);
        assert_eq!(first[0].as_str(), "2025-01-10");
        assert_eq!(first[2].as_str(), "2024-12-30");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PuzzleCatalog::new(Vec::new());

        assert!(catalog.is_empty());
        assert!(matches!(catalog.latest(), Err(CatalogError::Empty)));
        assert!(matches!(catalog.get_latest(), Err(CatalogError::Empty)));
        assert_eq!(catalog.list_ids_descending().count(), 0);
    }

    #[test]
    fn test_get_and_not_found() {
        let catalog = PuzzleCatalog::new([puzzle("2025-03-01")]);

        let found = catalog.get(&PuzzleId::new("2025-03-01")).unwrap();
        assert_eq!(found.id().as_str(), "2025-03-01");
        assert!(catalog.contains(&PuzzleId::new("2025-03-01")));

        let err = catalog.get(&PuzzleId::new("1999-01-01")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id.as_str() == "1999-01-01"));
    }

    #[test]
    fn test_from_json_rejects_invalid_puzzle() {
        let json = r#"{
            "2025-01-01": { "groups": { "G": { "level": 1, "items": ["A", "B", "C", "D"] } } },
            "2025-01-02": { "groups": { "G": { "level": 1, "items": ["A", "B", "C"] } } }
        }"#;

        let err = PuzzleCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPuzzle(PuzzleError::WrongGroupSize { .. })));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = PuzzleCatalog::from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
