//! Thresholds and fixed values used by the movie predicates
//!
//! This module centralizes the magic numbers of the domain layer so that the
//! predicates and the tests agree on them.

/// Audience score range
pub mod score {
    /// Lowest possible score
    pub const MIN: u8 = 0;

    /// Highest possible score
    pub const MAX: u8 = 100;

    /// Minimum audience count for a score to be considered relevant
    pub const RELEVANT_MIN_COUNT: u32 = 100;
}

/// Classic movie thresholds
pub mod classic {
    /// Minimum age in years
    pub const MIN_AGE_YEARS: i32 = 20;

    /// Score must be strictly above this
    pub const MIN_SCORE_EXCLUSIVE: u8 = 80;
}

/// Runtime based predicates
pub mod runtime {
    /// Movies strictly shorter than this are short
    pub const SHORT_BELOW_MINUTES: u32 = 30;

    /// Inclusive runtime range of a cosy romance
    pub const COSY_MINUTES: std::ops::RangeInclusive<u32> = 70..=100;
}

/// Comedy predicates
pub mod comedy {
    /// Relevant scores strictly below this mark slapstick
    pub const SLAPSTICK_BELOW_SCORE: u8 = 40;
}

/// Horror predicates
pub mod horror {
    /// Ratings strictly above this one are scary
    pub const SCARY_ABOVE_RATING: &str = "PG";
}

/// Input date format, e.g. `2010-02-12`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Base URL that `rotten_tomatoes_link` values are relative to
pub const ROTTEN_TOMATOES_BASE_URL: &str = "https://www.rottentomatoes.com/";
