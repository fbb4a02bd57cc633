//! Read-only sorted snapshots of aggregate child collections.

use std::ops::Deref;
use std::sync::Arc;

/// Immutable, sorted copy of a child collection.
///
/// Produced by [`crate::domain::entities::Owner::pets`] and
/// [`crate::domain::entities::Vet::specialties`]. The snapshot is detached from
/// the aggregate it was taken from: later changes to the aggregate are not
/// visible through it, and it offers no way to add, remove, or modify items.
///
/// ```compile_fail
/// use petclinic::domain::entities::{Owner, Pet};
///
/// let owner = Owner::new();
/// let mut pets = owner.pets();
/// pets.push(Pet::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedView<T> {
    items: Arc<[T]>,
}

impl<T: Clone> SortedView<T> {
    /// Copies `items` and sorts the copy by `key` (stable, ascending).
    pub fn from_sorted_by<'a, I, K, F>(items: I, mut key: F) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut copy: Vec<T> = items.into_iter().cloned().collect();
        copy.sort_by(|a, b| key(a).cmp(&key(b)));
        Self { items: copy.into() }
    }
}

impl<T> SortedView<T> {
    /// Returns an empty view.
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<T> Deref for SortedView<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a SortedView<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
