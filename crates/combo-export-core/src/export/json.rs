//! JSON sink
//!
//! Collects every record and writes them as one indented array on finish.
//! When writing to a path, the file is only created once there is something to write.

use super::{ExportResult, RecordSink};
use crate::ComboRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output file that is created on first write
pub struct DeferredFile {
    path: PathBuf,
    file: Option<BufWriter<File>>,
}

impl DeferredFile {
    fn open(&mut self) -> io::Result<&mut BufWriter<File>> {
        let file = match self.file.take() {
            Some(file) => file,
            None => {
                let file = File::create(&self.path)?;
                debug!("Created JSON output {:?}", self.path);
                BufWriter::new(file)
            }
        };
        Ok(self.file.insert(file))
    }
}

impl Write for DeferredFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Buffers records in memory and writes a pretty-printed JSON array
pub struct JsonSink<W: Write> {
    writer: W,
    records: Vec<ComboRecord>,
}

impl JsonSink<DeferredFile> {
    /// Prepare to write to `path`
    ///
    /// Fails if the parent directory does not exist or `path` is a directory.
    /// Nothing is created on disk until [`RecordSink::finish`].
    pub fn create(path: impl AsRef<Path>) -> ExportResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Directory does not exist: {}", parent.display()),
                )
                .into());
            }
        }
        if path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Output path is a directory: {}", path.display()),
            )
            .into());
        }

        Ok(Self::new(DeferredFile {
            path: path.to_path_buf(),
            file: None,
        }))
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn write_batch(&mut self, records: &[ComboRecord]) -> ExportResult<usize> {
        self.records.extend_from_slice(records);
        Ok(records.len())
    }

    fn finish(&mut self) -> ExportResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        self.writer.flush()?;
        Ok(())
    }
}
