//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /movies/by_category` (`?category=&year=`).
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: String,
    /// Accepted for compatibility with older clients. Kept as raw text so
    /// any value passes; it is never used to filter.
    pub year: Option<String>,
}
