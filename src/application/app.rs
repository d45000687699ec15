use crate::application::menu::{write_menu, MenuChoice};
use crate::catalog::{export, reports, Catalog};
use crate::config::Settings;
use crate::domain::{PersonRegistry, RatingRegistry};
use crate::infrastructure::CsvRecordSource;
use crate::ingestion::{CatalogLoader, RawRecord};
use crate::messages::{loading, menu as menu_text};
use crate::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Main application struct that owns the registries and the loaded catalog
pub struct Application {
    settings: Settings,
    ratings: RatingRegistry,
    persons: PersonRegistry,
    catalog: Catalog,
    skipped: usize,
}

impl Application {
    /// Load the input file named by the settings
    #[instrument(skip_all, fields(input = %settings.catalog.input_path.display()))]
    pub fn load(settings: Settings) -> Result<Self> {
        let mut source = CsvRecordSource::open(&settings.catalog.input_path)?;
        Self::from_records(settings, source.records())
    }

    /// Build the application from any record source
    pub fn from_records<I>(settings: Settings, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<RawRecord>>,
    {
        let ratings = RatingRegistry::standard()?;
        let mut persons = PersonRegistry::new();
        let outcome = CatalogLoader::new(&ratings, &mut persons).load_all(records)?;

        Ok(Self {
            settings,
            ratings,
            persons,
            catalog: outcome.catalog,
            skipped: outcome.skipped,
        })
    }

    /// The warning shown after loading, if any record was skipped
    pub fn skip_warning(&self) -> Option<String> {
        (self.skipped > 0).then(|| format!("{} {}", self.skipped, loading::SKIPPED_SUFFIX))
    }

    /// Run the menu until the user stops it or the input ends
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        loop {
            write_menu(&mut output)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                writeln!(output)?;
                return Ok(());
            }

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Stop) => {
                    writeln!(output, "{}", menu_text::STOPPED)?;
                    info!("Stopped by user");
                    return Ok(());
                }
                Ok(choice) => self.execute(choice, &mut output)?,
                Err(_) => writeln!(output, "{}", menu_text::INVALID_CHOICE)?,
            }
        }
    }

    /// Run one menu entry, writing its report to `output`
    pub fn execute<W: Write>(&self, choice: MenuChoice, output: &mut W) -> Result<()> {
        debug!(?choice, "Executing menu entry");
        match choice {
            MenuChoice::TotalFilms => writeln!(output, "{}", reports::total_films(&self.catalog))?,
            MenuChoice::FilmsPerGenre => {
                let counts = reports::films_per_genre(&self.catalog);
                if !counts.0.is_empty() {
                    writeln!(output, "{counts}")?;
                }
            }
            MenuChoice::TotalPersons => {
                writeln!(output, "{}", reports::total_persons(&self.persons))?
            }
            MenuChoice::HighestScore => {
                writeln!(output, "{}", reports::highest_scored(&self.catalog))?
            }
            MenuChoice::MostActiveDirectors => {
                writeln!(output, "{}", reports::most_active_directors(&self.catalog))?
            }
            MenuChoice::ShortestAndLongest => {
                writeln!(output, "{}", reports::shortest_and_longest(&self.catalog))?
            }
            MenuChoice::ScaryHorror => writeln!(
                output,
                "{}",
                reports::scary_horror(&self.catalog, &self.ratings)
            )?,
            MenuChoice::ScoreList => writeln!(output, "{}", reports::score_histogram(&self.catalog))?,
            MenuChoice::ExportWithoutRelevantScore => {
                let path = &self.settings.catalog.export_path;
                export::export_without_relevant_score(&self.catalog, path)?;
                writeln!(output, "Export completed: {}", path.display())?;
            }
            MenuChoice::Stop => {}
        }
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn persons(&self) -> &PersonRegistry {
        &self.persons
    }

    pub fn ratings(&self) -> &RatingRegistry {
        &self.ratings
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
