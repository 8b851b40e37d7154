//! Puzzle and group definitions.
//!
//! A [`Puzzle`] is an ordered list of [`Group`]s that partition its item
//! universe. Puzzles are immutable once built and are only constructed
//! through [`Puzzle::new`], which enforces the partition rules.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Item, GROUP_SIZE};

/// Puzzle identifier. Date-like (`2025-07-14`), so lexicographic order
/// is chronological order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(String);

impl PuzzleId {
    /// Create a new puzzle ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PuzzleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A puzzle violates the partition rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("puzzle {puzzle} has no groups")]
    NoGroups { puzzle: PuzzleId },
    #[error("group {group:?} in puzzle {puzzle} has {found} items (expected {expected})")]
    WrongGroupSize {
        puzzle: PuzzleId,
        group: String,
        expected: usize,
        found: usize,
    },
    #[error("item {item} appears more than once in puzzle {puzzle}")]
    DuplicateItem { puzzle: PuzzleId, item: Item },
    #[error("group name {group:?} is used twice in puzzle {puzzle}")]
    DuplicateGroupName { puzzle: PuzzleId, group: String },
    #[error("group {group:?} in puzzle {puzzle} contains an empty item name")]
    EmptyItem { puzzle: PuzzleId, group: String },
}

/// A hidden category: a name, a presentation tier, and its items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Category name, unique within its puzzle.
    pub name: String,

    /// Difficulty tier. Presentation only; gameplay ignores it.
    pub level: u32,

    /// Member items, in declaration order.
    pub items: SmallVec<[Item; GROUP_SIZE]>,
}

impl Group {
    /// Create a group. Validation happens when it joins a [`Puzzle`].
    pub fn new<I, T>(name: impl Into<String>, level: u32, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Self {
            name: name.into(),
            level,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if an item belongs to this group.
    #[must_use]
    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }
}

/// An immutable puzzle whose groups partition its item universe.
///
/// ```
/// use rust_connections::puzzles::{Group, Puzzle, PuzzleId};
///
/// let puzzle = Puzzle::new(
///     PuzzleId::new("2025-07-14"),
///     vec![
///         Group::new("Mid laners", 1, ["Ahri", "Lux", "Zed", "Yasuo"]),
///         Group::new("Crit items", 2, ["Infinity Edge", "Phantom Dancer", "Rapidfire Cannon", "Runaan's Hurricane"]),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(puzzle.universe_size(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    id: PuzzleId,
    groups: Vec<Group>,
}

impl Puzzle {
    /// Build a puzzle, checking that its groups partition the universe.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] naming the first rule that is broken.
    pub fn new(id: PuzzleId, groups: Vec<Group>) -> Result<Self, PuzzleError> {
        let puzzle = Self { id, groups };
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Re-check the partition rules.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] naming the first rule that is broken.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.groups.is_empty() {
            return Err(PuzzleError::NoGroups {
                puzzle: self.id.clone(),
            });
        }

        let mut names = FxHashSet::default();
        let mut seen = FxHashSet::default();

        for group in &self.groups {
            if !names.insert(group.name.as_str()) {
                return Err(PuzzleError::DuplicateGroupName {
                    puzzle: self.id.clone(),
                    group: group.name.clone(),
                });
            }
            if group.items.len() != GROUP_SIZE {
                return Err(PuzzleError::WrongGroupSize {
                    puzzle: self.id.clone(),
                    group: group.name.clone(),
                    expected: GROUP_SIZE,
                    found: group.items.len(),
                });
            }
            for item in &group.items {
                if item.name().trim().is_empty() {
                    return Err(PuzzleError::EmptyItem {
                        puzzle: self.id.clone(),
                        group: group.name.clone(),
                    });
                }
                if !seen.insert(item) {
                    return Err(PuzzleError::DuplicateItem {
                        puzzle: self.id.clone(),
                        item: item.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Puzzle identifier.
    #[must_use]
    pub fn id(&self) -> &PuzzleId {
        &self.id
    }

    /// Groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Every item in the puzzle, group by group.
    pub fn universe(&self) -> impl Iterator<Item = &Item> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Size of the item universe.
    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.groups.len() * GROUP_SIZE
    }
}
