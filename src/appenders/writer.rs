//! Appender that renders entries into any `std::io::Write`

use crate::core::{
    Appender, Context, Fields, LogLevel, OutputFormat, Record, Result, TimestampFormat,
};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one line per entry, `[LEVEL] message` followed by the fields as
/// `k=v` pairs when there are any.
///
/// Each line is flushed as soon as it is written, so buffered writers such
/// as [`WriterAppender::file`] never hold entries back. Write failures are
/// reported on stderr and dropped; the logging call itself never fails.
///
/// # Example
///
/// ```
/// use context_journal::prelude::*;
///
/// let appender = WriterAppender::new(Vec::new());
/// let ctx = Context::background().with_level(LogLevel::Info);
/// appender.append(&ctx, LogLevel::Warn, &Fields::new().with_field("size", 2), "Hello Mary");
///
/// let bytes = appender.into_inner();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "[WARN] Hello Mary size=2\n");
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: Mutex<W>,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            output_format: OutputFormat::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the line layout
    ///
    /// ```
    /// use context_journal::{OutputFormat, WriterAppender};
    ///
    /// let appender = WriterAppender::stdout().with_output_format(OutputFormat::Logfmt);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Timestamp layout used by the Text, Json and Logfmt formats
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> W {
        let mut writer = self.writer.into_inner();
        if let Err(e) = writer.flush() {
            eprintln!("[JOURNAL ERROR] Writer flush failed: {}", e);
        }
        writer
    }
}

impl WriterAppender<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterAppender<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriterAppender<BufWriter<File>> {
    /// Append to the file at `path`, creating it when missing
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&self, _ctx: &Context, level: LogLevel, fields: &Fields, message: &str) {
        let record = Record::new(level, message, fields);
        let mut line = self.output_format.format(&record, &self.timestamp_format);
        line.push('\n');

        let mut writer = self.writer.lock();
        if let Err(e) = writer.write_all(line.as_bytes()).and_then(|()| writer.flush()) {
            eprintln!("[JOURNAL ERROR] Writer append failed: {}", e);
        }
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
