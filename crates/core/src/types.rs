use chrono::Datelike;

/// Movie identifiers are caller-supplied and not required to be unique.
pub type MovieId = i64;

/// Calendar year as stored on a movie record.
pub type Year = i32;

/// The current calendar year in the server's local time zone, the upper
/// bound for a movie's `year`.
pub fn current_year() -> Year {
    chrono::Local::now().year()
}
