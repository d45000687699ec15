use thiserror::Error;

/// Movie catalog error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {field}")]
    InvalidArgument { field: String },

    #[error("Duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("Unknown genre: {genre:?}")]
    UnknownGenre { genre: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber {
        field: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid date in {field}: {value:?}")]
    InvalidDate {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    pub fn invalid_argument(field: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
        }
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre {
            genre: genre.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// True for the per-record error kinds that the loader skips over.
    ///
    /// Source-level failures (IO, CSV framing, configuration) are fatal.
    pub fn is_record_error(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Io(_) | Self::Csv(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
