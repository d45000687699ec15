//! Domain types for the movie catalog
//!
//! Ratings, people, genres and the movie entity itself. Everything here is
//! free of I/O; registries are plain values owned by the caller.

pub mod genre;
pub mod movie;
pub mod person;
pub mod rating;
pub mod types;
pub mod validation_constants;

pub use genre::Genre;
pub use movie::{Movie, MovieDetails};
pub use person::{Person, PersonRegistry};
pub use rating::{Rating, RatingRegistry};
