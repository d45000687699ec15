//! Property test generators

use movie_catalog::domain::rating::STANDARD_RATINGS;
use movie_catalog::domain::types::{AudienceCount, MovieTitle, RtLink, RuntimeMinutes, Score};
use movie_catalog::domain::{Genre, Movie, MovieDetails, PersonRegistry, RatingRegistry};
use movie_catalog::Catalog;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;
use proptest::string::string_regex;

/// Plain description of a movie, turned into a real one by [`build_catalog`]
#[derive(Debug, Clone)]
pub struct MovieSpec {
    pub genre: Genre,
    pub rating: &'static str,
    pub title: String,
    pub directors: Vec<&'static str>,
    pub score: Option<u8>,
    pub count: Option<u32>,
    pub length: Option<u32>,
}

/// Director names with deliberate case-only duplicates
pub const DIRECTOR_POOL: [&str; 5] = ["Jane Doe", "JANE DOE", "John Roe", "Ann Lee", "ann lee"];

pub fn genre() -> impl Strategy<Value = Genre> {
    select(Genre::ALL.to_vec())
}

pub fn rating_code() -> impl Strategy<Value = &'static str> {
    select(STANDARD_RATINGS.iter().map(|(code, _)| *code).collect::<Vec<_>>())
}

pub fn title() -> impl Strategy<Value = String> {
    string_regex("[A-Za-z][A-Za-z0-9 ]{0,15}").unwrap()
}

pub fn movie_spec() -> impl Strategy<Value = MovieSpec> {
    (
        genre(),
        rating_code(),
        title(),
        vec(select(DIRECTOR_POOL.to_vec()), 0..3),
        proptest::option::of(0u8..=100),
        proptest::option::of(0u32..400),
        proptest::option::of(1u32..300),
    )
        .prop_map(
            |(genre, rating, title, directors, score, count, length)| MovieSpec {
                genre,
                rating,
                title,
                directors,
                score,
                count,
                length,
            },
        )
}

pub fn movie_specs() -> impl Strategy<Value = Vec<MovieSpec>> {
    vec(movie_spec(), 0..40)
}

/// Materialize `specs` against the given registries
pub fn build_catalog(
    specs: &[MovieSpec],
    ratings: &RatingRegistry,
    persons: &mut PersonRegistry,
) -> Catalog {
    specs
        .iter()
        .map(|spec| {
            let details = MovieDetails {
                directors: spec
                    .directors
                    .iter()
                    .map(|name| persons.get_or_create(name).unwrap())
                    .collect(),
                length: spec.length.map(RuntimeMinutes::new),
                score: spec.score.map(|value| Score::try_new(value).unwrap()),
                count: spec.count.map(AudienceCount::new),
                ..MovieDetails::default()
            };
            Movie::new(
                spec.genre,
                RtLink::try_new(format!("m/{}", spec.title)).unwrap(),
                MovieTitle::try_new(spec.title.clone()).unwrap(),
                ratings.lookup(spec.rating).unwrap(),
                details,
            )
        })
        .collect()
}
