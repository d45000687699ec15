//! Validated value types for movie records
//!
//! Field-level invariants are enforced once, at construction, so the rest of
//! the crate can rely on them without re-checking.

use crate::domain::validation_constants::score;
use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Rotten Tomatoes link path, e.g. `m/0814255`
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct RtLink(String);

/// Movie title as it appears in the source data
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct MovieTitle(String);

/// Production company name
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct CompanyName(String);

/// A person's full name, casing preserved
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, Serialize, Deserialize, AsRef, Display)
)]
pub struct FullName(String);

impl FullName {
    /// Case-insensitive registry key
    pub fn key(&self) -> String {
        self.as_ref().to_lowercase()
    }
}

/// Content rating code such as `PG-13`
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct RatingCode(String);

/// Human readable explanation of a rating code
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct RatingDescription(String);

/// Audience score, a percentage
#[nutype(
    validate(less_or_equal = 100),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Score(u8);

impl Score {
    /// Every possible score, lowest first
    pub fn all() -> impl Iterator<Item = Score> {
        (score::MIN..=score::MAX).filter_map(|value| Score::try_new(value).ok())
    }
}

/// Number of audience members behind a score
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct AudienceCount(u32);

/// Running time in minutes
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct RuntimeMinutes(u32);
