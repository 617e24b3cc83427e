use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- plain-text landing response.
async fn home() -> &'static str {
    "Home"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
