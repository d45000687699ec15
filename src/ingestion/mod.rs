//! Ingestion of raw input rows into a [`Catalog`](crate::catalog::Catalog)
//!
//! Rows arrive as [`RawRecord`]s from any source; the [`MovieFactory`] types
//! them and the [`CatalogLoader`] collects the ones that are valid.

pub mod factory;
pub mod loader;
pub mod record;

pub use factory::MovieFactory;
pub use loader::{CatalogLoader, LoadOutcome};
pub use record::RawRecord;
