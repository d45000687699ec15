//! The in-memory catalog and the queries that run over it

pub mod export;
pub mod reports;

use crate::domain::Movie;
use derive_more::{From, Into};

/// Loaded movies in file order
///
/// Duplicates are kept. Once loaded the catalog is only read.
#[derive(Debug, Clone, Default, From, Into)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Movie> for Catalog {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self {
            movies: iter.into_iter().collect(),
        }
    }
}
