//! Output-record persistence.

use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wcdaq_core::OutputRecord;

/// Persistence boundary the pipeline hands records across.
///
/// One record per event, written once; the caller owns flushing at end of
/// run.
pub trait RecordSink: Send {
    /// Persists one event record.
    fn write_record(&mut self, record: &OutputRecord) -> Result<()>;

    /// Flushes buffered records.
    fn flush(&mut self) -> Result<()>;
}

/// JSON-lines record writer: one `OutputRecord` document per line.
pub struct JsonRecordWriter<W: Write + Send = BufWriter<File>> {
    writer: W,
}

impl JsonRecordWriter {
    /// Creates a writer backed by a buffered file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl<W: Write + Send> JsonRecordWriter<W> {
    /// Wraps an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> RecordSink for JsonRecordWriter<W> {
    fn write_record(&mut self, record: &OutputRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
