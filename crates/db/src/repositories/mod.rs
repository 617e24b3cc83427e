//! Operations over the in-memory collection.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
