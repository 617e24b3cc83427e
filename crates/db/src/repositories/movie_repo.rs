//! Repository for the in-memory movie collection.
//!
//! Every operation is a linear scan. Ids are not unique: lookups return the
//! first match in insertion order, while update and delete touch every match.
//! Mutations build their returned snapshot under the same write guard.

use cinedex_core::types::MovieId;

use crate::models::movie::{Movie, UpdateMovie};
use crate::MovieStore;

/// Provides the collection operations over a [`MovieStore`].
pub struct MovieRepo;

impl MovieRepo {
    /// All movies in insertion order.
    pub async fn list(store: &MovieStore) -> Vec<Movie> {
        store.read().await.clone()
    }

    /// First movie whose `id` matches.
    pub async fn find_by_id(store: &MovieStore, id: MovieId) -> Option<Movie> {
        store.read().await.iter().find(|m| m.id == id).cloned()
    }

    /// First movie whose `category` equals `category` exactly (case-sensitive).
    pub async fn find_by_category(store: &MovieStore, category: &str) -> Option<Movie> {
        store
            .read()
            .await
            .iter()
            .find(|m| m.category == category)
            .cloned()
    }

    /// Append a movie and return the whole collection.
    ///
    /// No uniqueness check is made on `id`. Callers validate the input first.
    pub async fn create(store: &MovieStore, movie: Movie) -> Vec<Movie> {
        let mut movies = store.write().await;
        tracing::debug!(movie_id = movie.id, "Appending movie");
        movies.push(movie);
        movies.clone()
    }

    /// Replace the mutable fields of every movie whose `id` matches and
    /// return the whole collection. No match leaves the collection as is.
    pub async fn update(store: &MovieStore, id: MovieId, input: &UpdateMovie) -> Vec<Movie> {
        let mut movies = store.write().await;
        let mut updated = 0usize;
        for movie in movies.iter_mut().filter(|m| m.id == id) {
            movie.apply(input);
            updated += 1;
        }
        tracing::debug!(movie_id = id, updated, "Updated movies");
        movies.clone()
    }

    /// Remove every movie whose `id` matches and return the whole collection.
    pub async fn delete(store: &MovieStore, id: MovieId) -> Vec<Movie> {
        let mut movies = store.write().await;
        let before = movies.len();
        let kept: Vec<Movie> = movies.iter().filter(|m| m.id != id).cloned().collect();
        *movies = kept;
        tracing::debug!(movie_id = id, removed = before - movies.len(), "Deleted movies");
        movies.clone()
    }
}
