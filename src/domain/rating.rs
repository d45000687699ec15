//! Content ratings and the registry that owns them

use crate::domain::types::{RatingCode, RatingDescription};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

/// The standard ratings, lowest rank first
pub const STANDARD_RATINGS: [(&str, &str); 6] = [
    ("NR", "Not Rated"),
    ("G", "General audiences"),
    ("PG", "Parental guidance suggested"),
    ("PG-13", "Parents strongly cautioned"),
    ("R", "Restricted"),
    ("NC17", "Adults only"),
];

/// A content rating such as `PG-13`
///
/// Ratings compare equal by code and order by their rank in the registry
/// that created them.
#[derive(Debug, Clone)]
pub struct Rating {
    code: RatingCode,
    description: RatingDescription,
    rank: usize,
}

impl Rating {
    pub fn code(&self) -> &RatingCode {
        &self.code
    }

    pub fn description(&self) -> &RatingDescription {
        &self.description
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Rating {}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            Some(self.rank.cmp(&other.rank))
        }
    }
}

/// Keyed store of ratings; rank is the registration position
#[derive(Debug, Default)]
pub struct RatingRegistry {
    by_code: HashMap<RatingCode, Arc<Rating>>,
}

impl RatingRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding [`STANDARD_RATINGS`] in their fixed order
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        for (code, description) in STANDARD_RATINGS {
            registry.register(code, description)?;
        }
        Ok(registry)
    }

    /// Register a new rating ranked above every rating registered so far
    pub fn register(&mut self, code: &str, description: &str) -> Result<Arc<Rating>> {
        let code = RatingCode::try_new(code.to_string())
            .map_err(|_| Error::invalid_argument("rating code"))?;
        let description = RatingDescription::try_new(description.to_string())
            .map_err(|_| Error::invalid_argument("rating description"))?;

        if self.by_code.contains_key(&code) {
            return Err(Error::duplicate_key(format!("rating {code}")));
        }

        let rating = Arc::new(Rating {
            code: code.clone(),
            description,
            rank: self.by_code.len(),
        });
        self.by_code.insert(code, Arc::clone(&rating));
        Ok(rating)
    }

    /// Look up a registered rating by its exact code
    pub fn lookup(&self, code: &str) -> Result<Arc<Rating>> {
        RatingCode::try_new(code.to_string())
            .ok()
            .and_then(|code| self.by_code.get(&code))
            .cloned()
            .ok_or_else(|| Error::not_found(format!("rating {code:?}")))
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
