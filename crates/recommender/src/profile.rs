//! User profiles: the positive-feedback subset of one User-Item Matrix row.

use data_loader::{DataIndex, MovieId, UserId};
use std::collections::BTreeSet;

/// Items a user has interacted with.
///
/// Derived fresh on every recommendation call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    user_id: UserId,
    items: BTreeSet<MovieId>,
}

impl Profile {
    /// Read the user's row. An unknown user has an empty profile.
    pub fn from_index(index: &DataIndex, user_id: UserId) -> Self {
        let items = index.interactions_of(user_id).cloned().unwrap_or_default();
        Self { user_id, items }
    }

    /// Profile from an explicit item list (duplicates collapse)
    pub fn from_items(user_id: UserId, items: impl IntoIterator<Item = MovieId>) -> Self {
        Self {
            user_id,
            items: items.into_iter().collect(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.items.contains(&movie_id)
    }

    /// Profile items in ascending id order
    pub fn items(&self) -> Vec<MovieId> {
        self.items.iter().copied().collect()
    }

    /// Catalog items the user has not interacted with, ascending
    pub fn unknown_items(&self, catalog: &[MovieId]) -> Vec<MovieId> {
        let mut unknown: Vec<MovieId> = catalog
            .iter()
            .copied()
            .filter(|id| !self.items.contains(id))
            .collect();
        unknown.sort_unstable();
        unknown.dedup();
        unknown
    }
}
