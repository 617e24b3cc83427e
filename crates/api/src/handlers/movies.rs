//! Handlers for the movie collection.
//!
//! Mutating endpoints answer with the whole collection after the change.
//! Update and delete of an id that matches nothing still succeed.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::types::MovieId;
use cinedex_core::validation::{validate_category_query, validate_movie_id};
use cinedex_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use cinedex_db::repositories::MovieRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::query::CategoryParams;
use crate::response::Lookup;
use crate::state::AppState;

/// GET /movies/
///
/// List every movie in insertion order.
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(MovieRepo::list(&state.store).await)
}

/// GET /movies/{id}
///
/// Return the first movie with the given id, or 404 with `{}`.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Lookup<Movie>> {
    validate_movie_id(id)?;

    Ok(MovieRepo::find_by_id(&state.store, id).await.into())
}

/// GET /movies/by_category?category=
///
/// Return the first movie whose category matches exactly, or 404 with `{}`.
pub async fn get_movie_by_category(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Lookup<Movie>> {
    validate_category_query(&params.category)?;

    if let Some(year) = &params.year {
        tracing::debug!(year = %year, "Ignoring year on category lookup");
    }

    Ok(MovieRepo::find_by_category(&state.store, &params.category)
        .await
        .into())
}

/// POST /movies/
///
/// Validate and append a movie. Returns 201 with the whole collection.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let movie_id = input.id;
    let movies = MovieRepo::create(&state.store, Movie::from(input)).await;

    tracing::info!(movie_id, count = movies.len(), "Movie created");

    Ok((StatusCode::CREATED, Json(movies)))
}

/// PUT /movies/{id}
///
/// Replace the mutable fields of every movie with this id.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    Json(input): Json<UpdateMovie>,
) -> Json<Vec<Movie>> {
    let movies = MovieRepo::update(&state.store, id, &input).await;

    tracing::info!(movie_id = id, count = movies.len(), "Movie updated");

    Json(movies)
}

/// DELETE /movies/{id}
///
/// Remove every movie with this id.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> Json<Vec<Movie>> {
    let movies = MovieRepo::delete(&state.store, id).await;

    tracing::info!(movie_id = id, count = movies.len(), "Movie deleted");

    Json(movies)
}
