//! Aggregate queries over a [`Catalog`]
//!
//! Each query returns a small result type whose `Display` is the text shown
//! to the user. None of them modify the catalog.

use crate::catalog::Catalog;
use crate::domain::types::{RuntimeMinutes, Score};
use crate::domain::validation_constants::score;
use crate::domain::{Genre, Movie, Person, PersonRegistry, RatingRegistry};
use crate::messages::reports as text;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Number of movies in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilmCount(pub usize);

impl fmt::Display for FilmCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total number of films: {}", self.0)
    }
}

pub fn total_films(catalog: &Catalog) -> FilmCount {
    FilmCount(catalog.len())
}

/// Movies per genre, most common first
///
/// Genres without movies are left out. Equal counts keep the order of
/// [`Genre::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCounts(pub Vec<(Genre, usize)>);

impl fmt::Display for GenreCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lines(f, self.0.iter().map(|(genre, count)| format!("{genre} : {count}")))
    }
}

pub fn films_per_genre(catalog: &Catalog) -> GenreCounts {
    let mut tally = [0usize; Genre::ALL.len()];
    for movie in catalog {
        tally[movie.genre().index()] += 1;
    }

    let mut counts: Vec<(Genre, usize)> = Genre::ALL
        .iter()
        .copied()
        .zip(tally)
        .filter(|(_, count)| *count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    GenreCounts(counts)
}

/// Number of distinct people known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonCount(pub usize);

impl fmt::Display for PersonCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total number of persons: {}", self.0)
    }
}

pub fn total_persons(persons: &PersonRegistry) -> PersonCount {
    PersonCount(persons.count())
}

/// Movies sharing the highest relevant score
#[derive(Debug, Clone, PartialEq)]
pub enum HighestScored<'a> {
    NoRelevantMovies,
    Found { score: Score, movies: Vec<&'a Movie> },
}

impl fmt::Display for HighestScored<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRelevantMovies => f.write_str(text::NO_RELEVANT_SCORE),
            Self::Found { score, movies } => {
                write!(f, "Highest score: {score}")?;
                write_titles(f, movies)
            }
        }
    }
}

pub fn highest_scored(catalog: &Catalog) -> HighestScored<'_> {
    let relevant: Vec<(&Movie, Score)> = catalog
        .iter()
        .filter_map(|movie| movie.relevant_score().map(|score| (movie, score)))
        .collect();

    match relevant.iter().map(|(_, score)| *score).max() {
        None => HighestScored::NoRelevantMovies,
        Some(best) => HighestScored::Found {
            score: best,
            movies: relevant
                .into_iter()
                .filter(|(_, score)| *score == best)
                .map(|(movie, _)| movie)
                .collect(),
        },
    }
}

/// Directors credited on the most movies
#[derive(Debug, Clone, PartialEq)]
pub enum MostActiveDirectors {
    NoDirectors,
    Found {
        films: usize,
        directors: Vec<Arc<Person>>,
    },
}

impl fmt::Display for MostActiveDirectors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDirectors => f.write_str(text::NO_DIRECTORS),
            Self::Found { films, directors } => {
                write!(f, "Most active director(s) ({films} films):")?;
                for director in directors {
                    write!(f, "\n- {}", director.fullname())?;
                }
                Ok(())
            }
        }
    }
}

/// Every credit counts once, so a movie with two directors adds one to each.
/// Ties are listed in the order the directors were first met.
pub fn most_active_directors(catalog: &Catalog) -> MostActiveDirectors {
    let mut position: HashMap<&Person, usize> = HashMap::new();
    let mut tally: Vec<(&Arc<Person>, usize)> = Vec::new();

    for director in catalog.iter().flat_map(Movie::directors) {
        match position.get(director.as_ref()) {
            Some(&index) => tally[index].1 += 1,
            None => {
                position.insert(director.as_ref(), tally.len());
                tally.push((director, 1));
            }
        }
    }

    match tally.iter().map(|(_, films)| *films).max() {
        None => MostActiveDirectors::NoDirectors,
        Some(films) => MostActiveDirectors::Found {
            films,
            directors: tally
                .into_iter()
                .filter(|(_, count)| *count == films)
                .map(|(director, _)| Arc::clone(director))
                .collect(),
        },
    }
}

/// The shortest and the longest movies by runtime
#[derive(Debug, Clone, PartialEq)]
pub enum LengthExtremes<'a> {
    NoLengthData,
    Found {
        shortest: RuntimeMinutes,
        shortest_movies: Vec<&'a Movie>,
        longest: RuntimeMinutes,
        longest_movies: Vec<&'a Movie>,
    },
}

impl fmt::Display for LengthExtremes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLengthData => f.write_str(text::NO_LENGTH),
            Self::Found {
                shortest,
                shortest_movies,
                longest,
                longest_movies,
            } => {
                write!(f, "Shortest movie(s) ({shortest} min):")?;
                write_titles(f, shortest_movies)?;
                write!(f, "\nLongest movie(s) ({longest} min):")?;
                write_titles(f, longest_movies)
            }
        }
    }
}

pub fn shortest_and_longest(catalog: &Catalog) -> LengthExtremes<'_> {
    let timed: Vec<(&Movie, RuntimeMinutes)> = catalog
        .iter()
        .filter_map(|movie| movie.length().map(|length| (movie, length)))
        .collect();

    let lengths = timed.iter().map(|(_, length)| *length);
    let (Some(shortest), Some(longest)) = (lengths.clone().min(), lengths.max()) else {
        return LengthExtremes::NoLengthData;
    };

    let at = |bound: RuntimeMinutes| {
        timed
            .iter()
            .filter(|(_, length)| *length == bound)
            .map(|(movie, _)| *movie)
            .collect::<Vec<_>>()
    };

    LengthExtremes::Found {
        shortest,
        shortest_movies: at(shortest),
        longest,
        longest_movies: at(longest),
    }
}

/// Horror movies rated above PG
#[derive(Debug, Clone, PartialEq)]
pub enum ScaryHorror<'a> {
    NoneFound,
    Found(Vec<&'a Movie>),
}

impl fmt::Display for ScaryHorror<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoneFound => f.write_str(text::NO_SCARY_HORROR),
            Self::Found(movies) => {
                f.write_str(text::SCARY_HORROR_HEADING)?;
                write_titles(f, movies)
            }
        }
    }
}

pub fn scary_horror<'a>(catalog: &'a Catalog, ratings: &RatingRegistry) -> ScaryHorror<'a> {
    let movies: Vec<&Movie> = catalog
        .iter()
        .filter(|movie| movie.is_scary(ratings) == Some(true))
        .collect();

    if movies.is_empty() {
        ScaryHorror::NoneFound
    } else {
        ScaryHorror::Found(movies)
    }
}

/// Number of movies at each score from 0 to 100
///
/// Movies without a score are not counted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreHistogram {
    buckets: Vec<usize>,
}

impl ScoreHistogram {
    /// `(score, movies)` for every score, lowest first
    pub fn buckets(&self) -> impl Iterator<Item = (Score, usize)> + '_ {
        Score::all().zip(self.buckets.iter().copied())
    }

    pub fn count(&self, score: Score) -> usize {
        self.buckets[usize::from(score.into_inner())]
    }
}

impl fmt::Display for ScoreHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lines(
            f,
            self.buckets()
                .map(|(score, movies)| format!("{score}%: {movies}")),
        )
    }
}

pub fn score_histogram(catalog: &Catalog) -> ScoreHistogram {
    let mut buckets = vec![0usize; usize::from(score::MAX) + 1];
    for value in catalog.iter().filter_map(Movie::score) {
        buckets[usize::from(value.into_inner())] += 1;
    }
    ScoreHistogram { buckets }
}

fn write_titles(f: &mut fmt::Formatter<'_>, movies: &[&Movie]) -> fmt::Result {
    for movie in movies {
        write!(f, "\n- {}", movie.title())?;
    }
    Ok(())
}

fn write_lines<I>(f: &mut fmt::Formatter<'_>, lines: I) -> fmt::Result
where
    I: IntoIterator<Item = String>,
{
    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            f.write_str("\n")?;
        }
        f.write_str(&line)?;
    }
    Ok(())
}
