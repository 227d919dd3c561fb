//! CSV sink
//!
//! Writes a fixed `A,B,ComboResult` header followed by one row per record.
//! The uid is never written.

use super::{ExportResult, RecordSink};
use crate::ComboRecord;
use ::csv::{Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Column headers, in row order
pub const CSV_HEADER: [&str; 3] = ["A", "B", "ComboResult"];

/// Streams records to delimited text
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
}

impl CsvSink<File> {
    /// Create (or truncate) the file at `path` and write the header
    pub fn create(path: impl AsRef<Path>) -> ExportResult<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!("Created CSV output {:?}", path);
        Self::new(file)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap `inner` and write the header
    pub fn new(inner: W) -> ExportResult<Self> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);
        writer.write_record(CSV_HEADER)?;

        Ok(Self { writer })
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> ExportResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_batch(&mut self, records: &[ComboRecord]) -> ExportResult<usize> {
        for record in records {
            self.writer.write_record(record.csv_row())?;
        }
        Ok(records.len())
    }

    fn finish(&mut self) -> ExportResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
