//! CSV export of the movies without a relevant score

use crate::catalog::Catalog;
use crate::domain::types::{AudienceCount, RuntimeMinutes, Score};
use crate::domain::Movie;
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

/// Column order of the export file
pub const EXPORT_HEADER: [&str; 11] = [
    "rt_link",
    "title",
    "rating",
    "genre",
    "directors",
    "release_date",
    "streaming_date",
    "length",
    "company",
    "score",
    "count",
];

/// Separator between director names in the `directors` column
pub const DIRECTOR_SEPARATOR: &str = ";";

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    rt_link: &'a str,
    title: &'a str,
    rating: &'a str,
    genre: String,
    directors: String,
    release_date: Option<NaiveDate>,
    streaming_date: Option<NaiveDate>,
    length: Option<RuntimeMinutes>,
    company: Option<&'a str>,
    score: Option<Score>,
    count: Option<AudienceCount>,
}

impl<'a> From<&'a Movie> for ExportRow<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            rt_link: movie.rt_link().as_ref(),
            title: movie.title().as_ref(),
            rating: movie.rating().code().as_ref(),
            genre: movie.genre().to_string(),
            directors: movie
                .directors()
                .iter()
                .map(|person| person.fullname().as_ref())
                .collect::<Vec<&str>>()
                .join(DIRECTOR_SEPARATOR),
            release_date: movie.release_date(),
            streaming_date: movie.streaming_date(),
            length: movie.length(),
            company: movie.company().map(AsRef::as_ref),
            score: movie.score(),
            count: movie.count(),
        }
    }
}

/// Movies without a relevant score, sorted by title
///
/// The sort is stable, so equal titles keep their catalog order.
pub fn movies_without_relevant_score(catalog: &Catalog) -> Vec<&Movie> {
    let mut movies: Vec<&Movie> = catalog
        .iter()
        .filter(|movie| !movie.has_relevant_score())
        .collect();
    movies.sort_by(|a, b| a.title().cmp(b.title()));
    movies
}

/// Write the export to `writer`, returning the number of data rows
pub fn write_without_relevant_score<W: Write>(catalog: &Catalog, writer: W) -> Result<usize> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(EXPORT_HEADER)?;

    let movies = movies_without_relevant_score(catalog);
    for movie in &movies {
        csv.serialize(ExportRow::from(*movie))?;
    }
    csv.flush()?;
    Ok(movies.len())
}

/// Write the export to the file at `path`, replacing any previous export
#[instrument(skip(catalog))]
pub fn export_without_relevant_score(catalog: &Catalog, path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    let rows = write_without_relevant_score(catalog, file)?;
    info!(rows, path = %path.display(), "Export written");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CompanyName, MovieTitle, RtLink};
    use crate::domain::{Genre, MovieDetails, PersonRegistry, RatingRegistry};

    fn movie(title: &str, details: MovieDetails) -> Movie {
        let ratings = RatingRegistry::standard().unwrap();
        Movie::new(
            Genre::Horror,
            RtLink::try_new(format!("m/{}", title.to_lowercase())).unwrap(),
            MovieTitle::try_new(title.to_string()).unwrap(),
            ratings.lookup("R").unwrap(),
            details,
        )
    }

    fn exported(catalog: &Catalog) -> String {
        let mut buffer = Vec::new();
        write_without_relevant_score(catalog, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_rows_are_sorted_by_title() {
        let catalog = Catalog::from(vec![
            movie("Zeta", MovieDetails::default()),
            movie("Alpha", MovieDetails::default()),
        ]);

        let titles: Vec<String> = movies_without_relevant_score(&catalog)
            .iter()
            .map(|m| m.title().to_string())
            .collect();
        assert_eq!(titles, ["Alpha", "Zeta"]);
    }

    #[test]
    fn test_relevant_movies_are_left_out() {
        let relevant = MovieDetails {
            score: Some(Score::try_new(90).unwrap()),
            count: Some(AudienceCount::new(100)),
            ..MovieDetails::default()
        };
        let thin = MovieDetails {
            score: Some(Score::try_new(90).unwrap()),
            count: Some(AudienceCount::new(99)),
            ..MovieDetails::default()
        };
        let catalog = Catalog::from(vec![movie("Kept", thin), movie("Dropped", relevant)]);

        let output = exported(&catalog);
        assert!(output.contains("Kept"));
        assert!(!output.contains("Dropped"));
    }

    #[test]
    fn test_header_is_written_even_without_rows() {
        assert_eq!(
            exported(&Catalog::new()),
            "rt_link,title,rating,genre,directors,release_date,streaming_date,length,company,score,count\n"
        );
    }

    #[test]
    fn test_row_layout() {
        let mut persons = PersonRegistry::new();
        let details = MovieDetails {
            directors: vec![
                persons.get_or_create("Joel Coen").unwrap(),
                persons.get_or_create("Ethan Coen").unwrap(),
            ],
            release_date: NaiveDate::from_ymd_opt(1996, 3, 8),
            length: Some(RuntimeMinutes::new(98)),
            company: Some(CompanyName::try_new("Gramercy, Inc.".to_string()).unwrap()),
            score: Some(Score::try_new(92).unwrap()),
            ..MovieDetails::default()
        };
        let catalog = Catalog::from(vec![movie("Fargo", details)]);

        let output = exported(&catalog);
        let row = output.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "m/fargo,Fargo,R,Horror,Joel Coen;Ethan Coen,1996-03-08,,98,\"Gramercy, Inc.\",92,"
        );
    }

    #[test]
    fn test_export_overwrites_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_relevant_score.csv");
        std::fs::write(&path, "stale contents that are longer than the export\n".repeat(50))
            .unwrap();

        let catalog = Catalog::from(vec![movie("Alpha", MovieDetails::default())]);
        let rows = export_without_relevant_score(&catalog, &path).unwrap();

        assert_eq!(rows, 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(!written.contains("stale"));
    }
}
