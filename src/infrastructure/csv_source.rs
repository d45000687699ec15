//! CSV record source for the input file
//!
//! The sample data is not valid UTF-8, so rows are read as bytes and decoded
//! as ISO-8859-1, where every byte is the code point of the same value.

use crate::error::Result;
use crate::ingestion::RawRecord;
use csv::{ByteRecord, Reader, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Reads header-bearing CSV into [`RawRecord`]s
pub struct CsvRecordSource<R> {
    reader: Reader<R>,
    headers: Vec<String>,
}

impl CsvRecordSource<File> {
    /// Open the file at `path` and read its header row
    #[instrument]
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> CsvRecordSource<R> {
    pub fn from_reader(input: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);
        let headers: Vec<String> = reader.byte_headers()?.iter().map(decode_latin1).collect();
        debug!(columns = headers.len(), "Read CSV header");
        Ok(Self { reader, headers })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Iterate over the remaining rows
    ///
    /// Short rows leave their trailing fields absent and extra values are
    /// dropped. Framing errors end up as `Err` items.
    pub fn records(&mut self) -> impl Iterator<Item = Result<RawRecord>> + '_ {
        let headers = &self.headers;
        self.reader.byte_records().map(move |row| {
            let row: ByteRecord = row?;
            Ok(headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.as_str(), decode_latin1(value)))
                .collect())
        })
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
