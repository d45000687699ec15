//! Turns raw input rows into typed movies

use crate::domain::types::{AudienceCount, CompanyName, MovieTitle, RtLink, RuntimeMinutes, Score};
use crate::domain::validation_constants::DATE_FORMAT;
use crate::domain::{Genre, Movie, MovieDetails, PersonRegistry, RatingRegistry};
use crate::error::{Error, Result};
use crate::ingestion::record::{fields, RawRecord};
use chrono::NaiveDate;

/// Builds movies, resolving ratings and directors through the registries
#[derive(Debug)]
pub struct MovieFactory<'a> {
    ratings: &'a RatingRegistry,
    persons: &'a mut PersonRegistry,
}

impl<'a> MovieFactory<'a> {
    pub fn new(ratings: &'a RatingRegistry, persons: &'a mut PersonRegistry) -> Self {
        Self { ratings, persons }
    }

    /// Create the movie described by `record`
    ///
    /// Directors are registered as they are read, so a record that fails
    /// after that point still leaves its directors in the person registry.
    pub fn create(&mut self, record: &RawRecord) -> Result<Movie> {
        let genre_label = record.get(fields::GENRE).unwrap_or_default();
        let genre =
            Genre::from_label(genre_label).ok_or_else(|| Error::unknown_genre(genre_label))?;

        let rating = self
            .ratings
            .lookup(record.get(fields::CONTENT_RATING).unwrap_or_default())?;

        let directors = match record.value(fields::DIRECTORS) {
            Some(names) => names
                .split(',')
                .map(|name| self.persons.get_or_create(name.trim()))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let score = parse_number(record, fields::AUDIENCE_RATING)?
            .map(|value| {
                u8::try_from(value)
                    .ok()
                    .and_then(|value| Score::try_new(value).ok())
                    .ok_or_else(|| Error::invalid_argument(fields::AUDIENCE_RATING))
            })
            .transpose()?;
        let count = parse_number(record, fields::AUDIENCE_COUNT)?.map(AudienceCount::new);
        let length = parse_number(record, fields::RUNTIME)?.map(RuntimeMinutes::new);

        let release_date = parse_date(record, fields::ORIGINAL_RELEASE_DATE)?;
        let streaming_date = parse_date(record, fields::STREAMING_RELEASE_DATE)?;

        let rt_link = RtLink::try_new(
            record
                .get(fields::ROTTEN_TOMATOES_LINK)
                .unwrap_or_default()
                .to_string(),
        )
        .map_err(|_| Error::invalid_argument(fields::ROTTEN_TOMATOES_LINK))?;
        let title = MovieTitle::try_new(
            record
                .get(fields::MOVIE_TITLE)
                .unwrap_or_default()
                .to_string(),
        )
        .map_err(|_| Error::invalid_argument(fields::MOVIE_TITLE))?;
        let company = record
            .value(fields::PRODUCTION_COMPANY)
            .and_then(|name| CompanyName::try_new(name.to_string()).ok());

        Ok(Movie::new(
            genre,
            rt_link,
            title,
            rating,
            MovieDetails {
                directors,
                release_date,
                streaming_date,
                length,
                company,
                score,
                count,
            },
        ))
    }
}

fn parse_number(record: &RawRecord, field: &str) -> Result<Option<u32>> {
    record
        .value(field)
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .map_err(|source| Error::InvalidNumber {
                    field: field.to_string(),
                    value: raw.to_string(),
                    source,
                })
        })
        .transpose()
}

fn parse_date(record: &RawRecord, field: &str) -> Result<Option<NaiveDate>> {
    record
        .value(field)
        .map(|raw| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| Error::InvalidDate {
                field: field.to_string(),
                value: raw.to_string(),
                source,
            })
        })
        .transpose()
}
