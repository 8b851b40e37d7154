//! Puzzle definitions, validation, and the catalog.
//!
//! - `definition`: `PuzzleId`, `Group`, `Puzzle` and the partition rules
//! - `source`: the JSON wire format and the `PuzzleSource` trait
//! - `catalog`: `PuzzleCatalog`, the immutable ID → puzzle lookup

pub mod catalog;
pub mod definition;
pub mod source;

pub use catalog::{CatalogError, PuzzleCatalog};
pub use definition::{Group, Puzzle, PuzzleError, PuzzleId};
pub use source::{JsonPuzzleSource, PuzzleSource, RawGroup, RawPuzzle, RawPuzzleSet};
