//! Movie field rules.
//!
//! The constraint table below is the only place the movie limits are
//! defined. Creation requests are checked against it; updates are not.
//!
//! | Field      | Constraint                      |
//! |------------|---------------------------------|
//! | `title`    | 5..=30 characters               |
//! | `overview` | 15..=100 characters             |
//! | `year`     | `1880 < year <= current year`   |
//! | `rating`   | `0.0 <= rating <= 10.0`         |
//! | `category` | 5..=50 characters               |

use crate::error::CoreError;
use crate::types::{MovieId, Year};

pub const TITLE_LEN: (usize, usize) = (5, 30);
pub const OVERVIEW_LEN: (usize, usize) = (15, 100);
pub const CATEGORY_LEN: (usize, usize) = (5, 50);

/// Length bounds for the `category` query parameter of a lookup, which are
/// tighter than the stored field's.
pub const CATEGORY_QUERY_LEN: (usize, usize) = (5, 20);

/// Exclusive lower bound for `year`.
pub const MIN_YEAR_EXCLUSIVE: Year = 1880;

pub const RATING_RANGE: (f64, f64) = (0.0, 10.0);

/// Rule code for length violations.
pub const RULE_LENGTH: &str = "length";
/// Rule code for numeric range violations.
pub const RULE_RANGE: &str = "range";

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: &'static str,
    pub message: String,
}

/// Borrowed view of the fields a movie is validated on.
#[derive(Debug, Clone, Copy)]
pub struct MovieFields<'a> {
    pub title: &'a str,
    pub overview: &'a str,
    pub year: Year,
    pub rating: f64,
    pub category: &'a str,
}

/// Check every field of a movie against the constraint table.
///
/// Returns one violation per offending field, in table order. An empty
/// vector means the movie is valid. `current_year` is the inclusive upper
/// bound for `year`; callers pass [`crate::types::current_year`].
pub fn validate_movie_fields(fields: &MovieFields<'_>, current_year: Year) -> Vec<FieldViolation> {
    [
        check_length("title", fields.title, TITLE_LEN),
        check_length("overview", fields.overview, OVERVIEW_LEN),
        check_year(fields.year, current_year),
        check_rating(fields.rating),
        check_length("category", fields.category, CATEGORY_LEN),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Lengths are counted in characters, not bytes.
pub fn check_length(
    field: &'static str,
    value: &str,
    (min, max): (usize, usize),
) -> Option<FieldViolation> {
    let len = value.chars().count();
    if (min..=max).contains(&len) {
        return None;
    }
    Some(FieldViolation {
        field,
        code: RULE_LENGTH,
        message: format!("{field} must be between {min} and {max} characters, got {len}"),
    })
}

pub fn check_year(year: Year, current_year: Year) -> Option<FieldViolation> {
    if year > MIN_YEAR_EXCLUSIVE && year <= current_year {
        return None;
    }
    Some(FieldViolation {
        field: "year",
        code: RULE_RANGE,
        message: format!(
            "year must be greater than {MIN_YEAR_EXCLUSIVE} and at most {current_year}, got {year}"
        ),
    })
}

/// NaN is never in range.
pub fn check_rating(rating: f64) -> Option<FieldViolation> {
    let (min, max) = RATING_RANGE;
    if (min..=max).contains(&rating) {
        return None;
    }
    Some(FieldViolation {
        field: "rating",
        code: RULE_RANGE,
        message: format!("rating must be between {min:.1} and {max:.1}, got {rating}"),
    })
}

/// Validate a path id for single-record lookup.
pub fn validate_movie_id(id: MovieId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!("id must be greater than 0, got {id}")));
    }
    Ok(())
}

/// Validate the `category` query parameter of a category lookup.
pub fn validate_category_query(category: &str) -> Result<(), CoreError> {
    match check_length("category", category, CATEGORY_QUERY_LEN) {
        Some(violation) => Err(CoreError::Validation(violation.message)),
        None => Ok(()),
    }
}
