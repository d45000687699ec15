use crate::generators::{self, DIRECTOR_POOL};
use movie_catalog::domain::rating::STANDARD_RATINGS;
use movie_catalog::domain::types::{AudienceCount, MovieTitle, RtLink, Score};
use movie_catalog::domain::{Genre, Movie, MovieDetails, PersonRegistry, RatingRegistry};
use movie_catalog::ingestion::record::fields;
use movie_catalog::ingestion::{MovieFactory, RawRecord};
use movie_catalog::Error;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn rating_order_follows_registration_order(
        a in 0..STANDARD_RATINGS.len(),
        b in 0..STANDARD_RATINGS.len(),
        c in 0..STANDARD_RATINGS.len(),
    ) {
        let ratings = RatingRegistry::standard().unwrap();
        let lookup = |i: usize| ratings.lookup(STANDARD_RATINGS[i].0).unwrap();
        let (ra, rb, rc) = (lookup(a), lookup(b), lookup(c));

        prop_assert_eq!(*ra < *rb, a < b);
        prop_assert_eq!(*ra == *rb, a == b);
        if *ra < *rb && *rb < *rc {
            prop_assert!(*ra < *rc);
        }
    }

    #[test]
    fn person_registry_ignores_case(names in proptest::collection::vec(
        proptest::sample::select(DIRECTOR_POOL.to_vec()), 0..20,
    )) {
        let mut persons = PersonRegistry::new();
        for name in &names {
            let person = persons.get_or_create(name).unwrap();
            let shouted = persons.get_or_create(&name.to_uppercase()).unwrap();
            prop_assert_eq!(&person, &shouted);
        }

        let distinct: HashSet<String> = names.iter().map(|name| name.to_lowercase()).collect();
        prop_assert_eq!(persons.count(), distinct.len());
    }

    #[test]
    fn relevant_score_depends_only_on_count(score in 0u8..=100, count in 0u32..1000) {
        let ratings = RatingRegistry::standard().unwrap();
        let movie = Movie::new(
            Genre::Drama,
            RtLink::try_new("m/x".to_string()).unwrap(),
            MovieTitle::try_new("X".to_string()).unwrap(),
            ratings.lookup("G").unwrap(),
            MovieDetails {
                score: Some(Score::try_new(score).unwrap()),
                count: Some(AudienceCount::new(count)),
                ..MovieDetails::default()
            },
        );
        prop_assert_eq!(movie.has_relevant_score(), count >= 100);
    }

    #[test]
    fn genre_specific_predicates_only_apply_to_their_genre(spec in generators::movie_spec()) {
        let ratings = RatingRegistry::standard().unwrap();
        let mut persons = PersonRegistry::new();
        let catalog = generators::build_catalog(&[spec], &ratings, &mut persons);
        let movie = &catalog.movies()[0];

        prop_assert_eq!(movie.is_slapstick().is_some(), movie.genre() == Genre::Comedy);
        prop_assert_eq!(movie.is_cosy().is_some(), movie.genre() == Genre::Romance);
        prop_assert_eq!(movie.is_scary(&ratings).is_some(), movie.genre() == Genre::Horror);
    }

    #[test]
    fn unmapped_genre_labels_are_rejected(label in "[A-Z &]{0,30}") {
        prop_assume!(Genre::from_label(&label).is_none());

        let ratings = RatingRegistry::standard().unwrap();
        let mut persons = PersonRegistry::new();
        let record = RawRecord::new()
            .with(fields::GENRE, label.as_str())
            .with(fields::CONTENT_RATING, "PG")
            .with(fields::ROTTEN_TOMATOES_LINK, "m/x")
            .with(fields::MOVIE_TITLE, "X");

        let result = MovieFactory::new(&ratings, &mut persons).create(&record);
        prop_assert!(
            matches!(result, Err(Error::UnknownGenre { .. })),
            "unexpected result: {:?}",
            result
        );
    }
}
