//! Group matching.
//!
//! A guess matches a group only when the two item sets are equal: same
//! size, same members, order irrelevant. Groups are scanned in puzzle
//! order so malformed, overlapping data still resolves deterministically.

use rustc_hash::FxHashSet;

use crate::core::Item;
use crate::puzzles::Group;

/// Find the group whose items are exactly `selection`.
///
/// Returns the group's index in `groups` along with the group.
///
/// ```
/// use rust_connections::core::Item;
/// use rust_connections::puzzles::Group;
/// use rust_connections::session::match_group;
///
/// let groups = [
///     Group::new("Vowels", 1, ["A", "E", "I", "O"]),
///     Group::new("Consonants", 2, ["B", "C", "D", "F"]),
/// ];
/// let guess: Vec<Item> = ["F", "D", "C", "B"].into_iter().map(Item::from).collect();
///
/// let (index, group) = match_group(&guess, &groups).unwrap();
/// assert_eq!(index, 1);
/// assert_eq!(group.name, "Consonants");
/// ```
#[must_use]
pub fn match_group<'a>(selection: &[Item], groups: &'a [Group]) -> Option<(usize, &'a Group)> {
    let wanted: FxHashSet<&Item> = selection.iter().collect();

    groups.iter().enumerate().find(|(_, group)| {
        let members: FxHashSet<&Item> = group.items.iter().collect();
        members.len() == wanted.len() && wanted.iter().all(|item| members.contains(item))
    })
}
