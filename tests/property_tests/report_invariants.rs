use crate::generators;
use movie_catalog::catalog::export;
use movie_catalog::catalog::reports::{self, HighestScored, LengthExtremes};
use movie_catalog::domain::{PersonRegistry, RatingRegistry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn histogram_counts_every_scored_movie_once(specs in generators::movie_specs()) {
        let ratings = RatingRegistry::standard().unwrap();
        let mut persons = PersonRegistry::new();
        let catalog = generators::build_catalog(&specs, &ratings, &mut persons);

        let histogram = reports::score_histogram(&catalog);
        let total: usize = histogram.buckets().map(|(_, movies)| movies).sum();
        let scored = specs.iter().filter(|spec| spec.score.is_some()).count();

        prop_assert_eq!(histogram.buckets().count(), 101);
        prop_assert_eq!(total, scored);
    }

    #[test]
    fn genre_counts_add_up_to_the_catalog(specs in generators::movie_specs()) {
        let ratings = RatingRegistry::standard().unwrap();
        let mut persons = PersonRegistry::new();
        let catalog = generators::build_catalog(&specs, &ratings, &mut persons);

        let counts = reports::films_per_genre(&catalog).0;
        let total: usize = counts.iter().map(|(_, films)| films).sum();

        prop_assert_eq!(total, reports::total_films(&catalog).0);
        prop_assert!(counts.iter().all(|(_, films)| *films > 0));
        prop_assert!(counts.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn highest_score_is_not_beaten_by_any_relevant_movie(specs in generators::movie_specs()) {
        let ratings = RatingRegistry::standard().unwrap();
        let mut persons = PersonRegistry::new();
        let catalog = generators::build_catalog(&specs, &ratings, &mut persons);

        match reports::highest_scored(&catalog) {
            HighestScored::NoRelevantMovies => {
                prop_assert!(catalog.iter().all(|movie| !movie.has_relevant_score()));
            }
            HighestScored::Found { score, movies } => {
                prop_assert!(!movies.is_empty());
                prop_assert!(movies.iter().all(|movie| movie.relevant_score() == Some(score)));
                prop_assert!(catalog
                    .iter()
                    .filter_map(|movie| movie.relevant_score())
                    .all(|other| other <= score));
            }
        }
    }

    #[test]
    fn length_extremes_bound_every_timed_movie(specs in generators::movie_specs()) {
        let ratings = RatingRegistry::standard().unwrap();
        let mut persons = PersonRegistry::new();
        let catalog = generators::build_catalog(&specs, &ratings, &mut persons);

        match reports::shortest_and_longest(&catalog) {
            LengthExtremes::NoLengthData => {
                prop_assert!(catalog.iter().all(|movie| movie.length().is_none()));
            }
            LengthExtremes::Found { shortest, longest, shortest_movies, longest_movies } => {
                prop_assert!(shortest <= longest);
                prop_assert!(!shortest_movies.is_empty());
                prop_assert!(!longest_movies.is_empty());
                prop_assert!(catalog
                    .iter()
                    .filter_map(|movie| movie.length())
                    .all(|length| shortest <= length && length <= longest));
            }
        }
    }

    #[test]
    fn export_selection_is_sorted_and_complements_relevant(specs in generators::movie_specs()) {
        let ratings = RatingRegistry::standard().unwrap();
        let mut persons = PersonRegistry::new();
        let catalog = generators::build_catalog(&specs, &ratings, &mut persons);

        let selected = export::movies_without_relevant_score(&catalog);
        let relevant = catalog.iter().filter(|movie| movie.has_relevant_score()).count();

        prop_assert_eq!(selected.len() + relevant, catalog.len());
        prop_assert!(selected.iter().all(|movie| !movie.has_relevant_score()));
        prop_assert!(selected.windows(2).all(|pair| pair[0].title() <= pair[1].title()));

        let mut written = Vec::new();
        let rows = export::write_without_relevant_score(&catalog, &mut written).unwrap();
        prop_assert_eq!(rows, selected.len());
        prop_assert_eq!(String::from_utf8(written).unwrap().lines().count(), rows + 1);
    }
}
