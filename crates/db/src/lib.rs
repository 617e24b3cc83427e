//! In-memory movie collection.
//!
//! The collection is one ordered `Vec<Movie>` behind a single
//! [`tokio::sync::RwLock`]. [`MovieStore`] is the handle the HTTP layer
//! keeps in its state; [`repositories::MovieRepo`] implements the
//! operations against it.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::movie::Movie;

pub mod models;
pub mod repositories;
pub mod seed;

/// Shared handle to the movie collection. Cloning shares the collection.
pub type MovieStore = Arc<RwLock<Vec<Movie>>>;

/// Create an empty collection.
pub fn create_store() -> MovieStore {
    Arc::new(RwLock::new(Vec::new()))
}

/// Create a collection that starts with the given movies, in order.
pub fn create_store_with(movies: Vec<Movie>) -> MovieStore {
    Arc::new(RwLock::new(movies))
}

/// Number of movies currently held.
pub async fn movie_count(store: &MovieStore) -> usize {
    store.read().await.len()
}
