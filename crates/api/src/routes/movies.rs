//! Route definitions for the movie collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes, mounted at the root.
///
/// ```text
/// GET    /movies/                 -> list_movies
/// POST   /movies/                 -> create_movie
/// GET    /movies/by_category      -> get_movie_by_category
/// GET    /movies/{id}             -> get_movie
/// PUT    /movies/{id}             -> update_movie
/// DELETE /movies/{id}             -> delete_movie
/// ```
///
/// The collection routes answer both with and without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies/", get(movies::list_movies).post(movies::create_movie))
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route("/movies/by_category", get(movies::get_movie_by_category))
        .route(
            "/movies/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}
