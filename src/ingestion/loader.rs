use crate::catalog::Catalog;
use crate::domain::{PersonRegistry, RatingRegistry};
use crate::error::Result;
use crate::ingestion::factory::MovieFactory;
use crate::ingestion::record::RawRecord;
use tracing::{debug, info, instrument, warn};

/// Result of loading a record source
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub skipped: usize,
}

/// Feeds records through a [`MovieFactory`], skipping the ones it rejects
pub struct CatalogLoader<'a> {
    factory: MovieFactory<'a>,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(ratings: &'a RatingRegistry, persons: &'a mut PersonRegistry) -> Self {
        Self {
            factory: MovieFactory::new(ratings, persons),
        }
    }

    /// Build a catalog from `records`, in order
    ///
    /// A record the factory rejects is counted and skipped. An `Err` coming
    /// from the source itself aborts the load.
    #[instrument(skip_all)]
    pub fn load_all<I>(&mut self, records: I) -> Result<LoadOutcome>
    where
        I: IntoIterator<Item = Result<RawRecord>>,
    {
        let mut outcome = LoadOutcome::default();

        for (index, record) in records.into_iter().enumerate() {
            let record = record?;
            match self.factory.create(&record) {
                Ok(movie) => outcome.catalog.push(movie),
                Err(error) if error.is_record_error() => {
                    debug!(row = index + 1, %error, "Skipping record");
                    outcome.skipped += 1;
                }
                Err(error) => return Err(error),
            }
        }

        info!(
            loaded = outcome.catalog.len(),
            skipped = outcome.skipped,
            "Catalog loaded"
        );
        if outcome.skipped > 0 {
            warn!(skipped = outcome.skipped, "Some records were skipped");
        }
        Ok(outcome)
    }
}
