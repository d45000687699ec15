use std::collections::HashMap;

/// Column names recognized in the input file
pub mod fields {
    pub const GENRE: &str = "genre";
    pub const CONTENT_RATING: &str = "content_rating";
    pub const DIRECTORS: &str = "directors";
    pub const AUDIENCE_RATING: &str = "audience_rating";
    pub const AUDIENCE_COUNT: &str = "audience_count";
    pub const RUNTIME: &str = "runtime";
    pub const ORIGINAL_RELEASE_DATE: &str = "original_release_date";
    pub const STREAMING_RELEASE_DATE: &str = "streaming_release_date";
    pub const ROTTEN_TOMATOES_LINK: &str = "rotten_tomatoes_link";
    pub const MOVIE_TITLE: &str = "movie_title";
    pub const PRODUCTION_COMPANY: &str = "production_company";
}

/// One input row as named string fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field; a repeated name replaces the earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// The raw value, which may be empty
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The value when present and non-empty
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}
