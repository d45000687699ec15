//! The movie entity and its genre-specific predicates

use crate::domain::genre::Genre;
use crate::domain::person::Person;
use crate::domain::rating::{Rating, RatingRegistry};
use crate::domain::types::{
    AudienceCount, CompanyName, MovieTitle, RtLink, RuntimeMinutes, Score,
};
use crate::domain::validation_constants::{
    classic, comedy, horror, runtime, score, ROTTEN_TOMATOES_BASE_URL,
};
use chrono::{Datelike, Local, NaiveDate};
use std::sync::Arc;

/// Optional attributes of a movie
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub directors: Vec<Arc<Person>>,
    pub release_date: Option<NaiveDate>,
    pub streaming_date: Option<NaiveDate>,
    pub length: Option<RuntimeMinutes>,
    pub company: Option<CompanyName>,
    pub score: Option<Score>,
    pub count: Option<AudienceCount>,
}

/// A loaded movie record
///
/// Immutable once built. The required fields are typed so that a movie
/// without a link, title or rating cannot exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    genre: Genre,
    rt_link: RtLink,
    title: MovieTitle,
    rating: Arc<Rating>,
    details: MovieDetails,
}

impl Movie {
    pub fn new(
        genre: Genre,
        rt_link: RtLink,
        title: MovieTitle,
        rating: Arc<Rating>,
        details: MovieDetails,
    ) -> Self {
        Self {
            genre,
            rt_link,
            title,
            rating,
            details,
        }
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn rt_link(&self) -> &RtLink {
        &self.rt_link
    }

    pub fn title(&self) -> &MovieTitle {
        &self.title
    }

    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    pub fn directors(&self) -> &[Arc<Person>] {
        &self.details.directors
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.details.release_date
    }

    pub fn streaming_date(&self) -> Option<NaiveDate> {
        self.details.streaming_date
    }

    pub fn length(&self) -> Option<RuntimeMinutes> {
        self.details.length
    }

    pub fn company(&self) -> Option<&CompanyName> {
        self.details.company.as_ref()
    }

    pub fn score(&self) -> Option<Score> {
        self.details.score
    }

    pub fn count(&self) -> Option<AudienceCount> {
        self.details.count
    }

    /// Full Rotten Tomatoes URL of this movie
    pub fn url(&self) -> String {
        format!("{ROTTEN_TOMATOES_BASE_URL}{}", self.rt_link)
    }

    /// The score, if enough of the audience rated the movie to trust it
    pub fn relevant_score(&self) -> Option<Score> {
        match (self.details.score, self.details.count) {
            (Some(value), Some(count)) if count.into_inner() >= score::RELEVANT_MIN_COUNT => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn has_relevant_score(&self) -> bool {
        self.relevant_score().is_some()
    }

    /// At least twenty years old as of `today` with a relevant score above 80
    pub fn is_classic_on(&self, today: NaiveDate) -> bool {
        let Some(released) = self.details.release_date else {
            return false;
        };
        let old_enough = today.year() - released.year() >= classic::MIN_AGE_YEARS;
        old_enough
            && self
                .relevant_score()
                .is_some_and(|value| value.into_inner() > classic::MIN_SCORE_EXCLUSIVE)
    }

    pub fn is_classic(&self) -> bool {
        self.is_classic_on(Local::now().date_naive())
    }

    pub fn is_short(&self) -> bool {
        self.details
            .length
            .is_some_and(|length| length.into_inner() < runtime::SHORT_BELOW_MINUTES)
    }

    /// Comedies only: a relevant score below 40
    pub fn is_slapstick(&self) -> Option<bool> {
        (self.genre == Genre::Comedy).then(|| {
            self.relevant_score()
                .is_some_and(|value| value.into_inner() < comedy::SLAPSTICK_BELOW_SCORE)
        })
    }

    /// Romances only: a runtime between 70 and 100 minutes
    pub fn is_cosy(&self) -> Option<bool> {
        (self.genre == Genre::Romance).then(|| {
            self.details
                .length
                .is_some_and(|length| runtime::COSY_MINUTES.contains(&length.into_inner()))
        })
    }

    /// Horror only: rated above PG
    ///
    /// When the registry has no PG rating nothing counts as scary.
    pub fn is_scary(&self, ratings: &RatingRegistry) -> Option<bool> {
        (self.genre == Genre::Horror).then(|| {
            ratings
                .lookup(horror::SCARY_ABOVE_RATING)
                .is_ok_and(|threshold| *self.rating > *threshold)
        })
    }
}
