//! Core domain types for the linked-data movie dataset.
//!
//! The dataset is implicit binary feedback: a user either interacted with a
//! movie (value `1`) or the pair is unknown. There is no negative evidence,
//! so absence of an interaction is never stored as `0`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Dataset Rows
// =============================================================================

/// Link between a catalog movie and its linked-data resource
/// (e.g. `http://dbpedia.org/resource/The_Matrix`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieLink {
    pub id: MovieId,
    pub uri: String,
}

/// A single observed interaction between a user and a movie.
///
/// Only observed interactions exist as rows. `value` is kept as read from
/// the training file but never weights the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub value: u8,
}

// =============================================================================
// DataIndex - the User-Item Matrix
// =============================================================================

/// In-memory User-Item Matrix plus the linked-data catalog.
///
/// Rows are users, columns are the mapped movies. A cell is `1` when the
/// pair is present in `user_items` and unknown otherwise. Both directions
/// are indexed: `user_items` gives a user's row, `item_users` gives a
/// movie's column (used by cosine similarity).
#[derive(Debug, Default)]
pub struct DataIndex {
    /// Catalog, ordered by movie id
    pub(crate) movies: BTreeMap<MovieId, MovieLink>,

    /// Movies each user interacted with
    pub(crate) user_items: HashMap<UserId, BTreeSet<MovieId>>,
    /// Users who interacted with each movie
    pub(crate) item_users: HashMap<MovieId, BTreeSet<UserId>>,
}

impl DataIndex {
    /// Creates a new, empty DataIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie link by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&MovieLink> {
        self.movies.get(&id)
    }

    /// Get the linked-data URI of a movie
    pub fn get_movie_uri(&self, id: MovieId) -> Option<&str> {
        self.movies.get(&id).map(|m| m.uri.as_str())
    }

    /// The globally sorted item-id list.
    ///
    /// This order labels both rows and columns of every similarity matrix.
    pub fn sorted_movie_ids(&self) -> Vec<MovieId> {
        self.movies.keys().copied().collect()
    }

    /// All catalog entries in id order
    pub fn movies(&self) -> impl Iterator<Item = &MovieLink> {
        self.movies.values()
    }

    /// All users with at least one interaction, sorted ascending
    pub fn all_user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.user_items.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Movies the user interacted with (the user's row)
    ///
    /// Returns `None` for users that have no interactions at all.
    pub fn interactions_of(&self, user_id: UserId) -> Option<&BTreeSet<MovieId>> {
        self.user_items.get(&user_id)
    }

    /// Users who interacted with the movie (the movie's column)
    pub fn users_of(&self, movie_id: MovieId) -> Option<&BTreeSet<UserId>> {
        self.item_users.get(&movie_id)
    }

    /// `true` when the cell `(user, movie)` holds an observed interaction
    pub fn is_observed(&self, user_id: UserId, movie_id: MovieId) -> bool {
        self.user_items
            .get(&user_id)
            .is_some_and(|items| items.contains(&movie_id))
    }

    /// Insert a movie link into the catalog
    pub fn insert_movie(&mut self, movie: MovieLink) {
        self.movies.insert(movie.id, movie);
    }

    /// Insert an interaction and update both indices
    ///
    /// Every row sets its cell to `1` regardless of `value`, and a repeated
    /// `(user, movie)` pair is still a single cell.
    pub fn insert_interaction(&mut self, interaction: Interaction) {
        self.user_items
            .entry(interaction.user_id)
            .or_default()
            .insert(interaction.movie_id);

        self.item_users
            .entry(interaction.movie_id)
            .or_default()
            .insert(interaction.user_id);
    }

    /// Get counts for debugging/validation: (users, movies, interactions)
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_interactions = self.user_items.values().map(|v| v.len()).sum();
        (self.user_items.len(), self.movies.len(), total_interactions)
    }
}
