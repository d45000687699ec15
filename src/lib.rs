//! Movie Catalog - typed movie records and aggregate reports
//!
//! Rows of a Rotten Tomatoes style export are turned into genre-specific
//! movie records, deduplicating ratings and directors along the way, and a
//! fixed set of reports is answered over the loaded catalog.

pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ingestion;
pub mod messages;

pub use application::Application;
pub use catalog::Catalog;
pub use error::{Error, Result};
