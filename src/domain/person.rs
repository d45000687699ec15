//! People referenced by movies, deduplicated by case-insensitive name

use crate::domain::types::FullName;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A person, e.g. a director
///
/// Two people are equal when their names match ignoring case.
#[derive(Debug, Clone)]
pub struct Person {
    fullname: FullName,
}

impl Person {
    pub fn fullname(&self) -> &FullName {
        &self.fullname
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.fullname.key() == other.fullname.key()
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fullname.key().hash(state);
    }
}

/// Flyweight store: at most one [`Person`] per lowercased name
#[derive(Debug, Default)]
pub struct PersonRegistry {
    by_key: HashMap<String, Arc<Person>>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the person with this name, creating it on first reference
    ///
    /// The first spelling seen is the one that is kept.
    pub fn get_or_create(&mut self, fullname: &str) -> Result<Arc<Person>> {
        let fullname = FullName::try_new(fullname.to_string())
            .map_err(|_| Error::invalid_argument("fullname"))?;
        let person = self
            .by_key
            .entry(fullname.key())
            .or_insert_with(|| Arc::new(Person { fullname }));
        Ok(Arc::clone(person))
    }

    /// Number of distinct people registered
    pub fn count(&self) -> usize {
        self.by_key.len()
    }
}
