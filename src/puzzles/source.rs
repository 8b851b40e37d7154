//! Puzzle data source and its wire format.
//!
//! Puzzle files map a puzzle ID to its groups, keyed by group name:
//!
//! ```json
//! {
//!   "2025-07-14": {
//!     "groups": {
//!       "Mid laners": { "level": 1, "items": ["Ahri", "Lux", "Zed", "Yasuo"] }
//!     }
//!   }
//! }
//! ```
//!
//! Group order in the file is kept; it is the order the matcher scans.
//! Loading is the host's job. The engine only sees the parsed
//! [`RawPuzzleSet`], which still has to pass validation before it can
//! become a [`PuzzleCatalog`](super::PuzzleCatalog).

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::definition::{Group, Puzzle, PuzzleError, PuzzleId};

/// One group as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGroup {
    /// Presentation tier.
    pub level: u32,
    /// Member item names.
    pub items: Vec<String>,
}

/// One puzzle as it appears on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPuzzle {
    /// Groups in file order, as `(name, group)` pairs.
    #[serde(
        deserialize_with = "deserialize_ordered_groups",
        serialize_with = "serialize_ordered_groups"
    )]
    pub groups: Vec<(String, RawGroup)>,
}

impl RawPuzzle {
    /// Validate and convert into a [`Puzzle`].
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the groups do not partition the items.
    pub fn into_puzzle(self, id: PuzzleId) -> Result<Puzzle, PuzzleError> {
        let groups = self
            .groups
            .into_iter()
            .map(|(name, raw)| Group::new(name, raw.level, raw.items))
            .collect();
        Puzzle::new(id, groups)
    }
}

/// Every puzzle in a data file, keyed by ID.
pub type RawPuzzleSet = BTreeMap<PuzzleId, RawPuzzle>;

/// Something that can produce puzzle definitions.
///
/// Hosts implement this over whatever transport they have (bundled
/// file, HTTP fetch, test fixture).
pub trait PuzzleSource {
    /// Error type for loading failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every available puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or parsed.
    fn load_puzzles(&self) -> Result<RawPuzzleSet, Self::Error>;
}

/// A [`PuzzleSource`] backed by an in-memory JSON document.
#[derive(Clone, Debug)]
pub struct JsonPuzzleSource {
    json: String,
}

impl JsonPuzzleSource {
    /// Wrap a JSON document.
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl PuzzleSource for JsonPuzzleSource {
    type Error = serde_json::Error;

    fn load_puzzles(&self) -> Result<RawPuzzleSet, Self::Error> {
        let set: RawPuzzleSet = serde_json::from_str(&self.json)?;
        if set.is_empty() {
            log::warn!("puzzle source contained no puzzles");
        }
        Ok(set)
    }
}

fn deserialize_ordered_groups<'de, D>(deserializer: D) -> Result<Vec<(String, RawGroup)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedGroups;

    impl<'de> Visitor<'de> for OrderedGroups {
        type Value = Vec<(String, RawGroup)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of group name to group")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(4));
            while let Some(entry) = map.next_entry::<String, RawGroup>()? {
                groups.push(entry);
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(OrderedGroups)
}

fn serialize_ordered_groups<S>(groups: &[(String, RawGroup)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(groups.iter().map(|(name, group)| (name, group)))
}
