//! Movie record and request DTOs.

use cinedex_core::types::{current_year, MovieId, Year};
use cinedex_core::validation::{validate_movie_fields, MovieFields};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A movie held in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub year: Year,
    pub rating: f64,
    pub category: String,
}

impl Movie {
    /// Overwrite every field except `id`.
    pub fn apply(&mut self, update: &UpdateMovie) {
        self.title.clone_from(&update.title);
        self.overview.clone_from(&update.overview);
        self.year = update.year;
        self.rating = update.rating;
        self.category.clone_from(&update.category);
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a movie. Checked against the field rules before it is
/// stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub year: Year,
    pub rating: f64,
    pub category: String,
}

impl CreateMovie {
    fn fields(&self) -> MovieFields<'_> {
        MovieFields {
            title: &self.title,
            overview: &self.overview,
            year: self.year,
            rating: self.rating,
            category: &self.category,
        }
    }

    /// Like [`Validate::validate`], with an explicit upper bound for `year`.
    pub fn validate_for_year(&self, current_year: Year) -> Result<(), ValidationErrors> {
        let violations = validate_movie_fields(&self.fields(), current_year);
        if violations.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        for violation in violations {
            let mut error = ValidationError::new(violation.code);
            error.message = Some(violation.message.into());
            errors.add(violation.field, error);
        }
        Err(errors)
    }
}

impl Validate for CreateMovie {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_for_year(current_year())
    }
}

impl From<CreateMovie> for Movie {
    fn from(input: CreateMovie) -> Self {
        Self {
            id: input.id,
            title: input.title,
            overview: input.overview,
            year: input.year,
            rating: input.rating,
            category: input.category,
        }
    }
}

/// DTO for replacing a movie's mutable fields. Not validated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub title: String,
    pub overview: String,
    pub year: Year,
    pub rating: f64,
    pub category: String,
}
