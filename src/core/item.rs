//! Board items.
//!
//! An [`Item`] is the opaque display name of one selectable tile. Items
//! compare by name, so a selection tracks items by identity rather than
//! by board position.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One selectable unit on the board, identified by its display name.
///
/// ```
/// use rust_connections::core::Item;
///
/// let ahri = Item::new("Ahri");
/// assert_eq!(ahri.name(), "Ahri");
/// assert_eq!(ahri, Item::from("Ahri"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    /// Create an item from its display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Item {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Item {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
