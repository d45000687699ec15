//! Infrastructure adapters
//!
//! File-backed sources for the ingestion layer.

pub mod csv_source;

pub use csv_source::CsvRecordSource;
