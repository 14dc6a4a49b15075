//! JSON appender for structured logging

use crate::core::{Appender, Context, Fields, LogLevel, Record, Result, TimestampFormat};
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: serde_json::Value,
    level: LogLevel,
    message: &'a str,
    thread: &'a str,
    #[serde(skip_serializing_if = "Fields::is_empty")]
    fields: &'a Fields,
}

/// Writes each entry as one JSON object (JSONL), fields nested under
/// `"fields"`. Every entry is flushed once written.
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
pub struct JsonAppender {
    writer: Mutex<Box<dyn Write + Send>>,
    pretty: bool,
    timestamp_format: TimestampFormat,
}

impl JsonAppender {
    /// Append JSON lines to the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Like [`JsonAppender::new`], one indented object per entry
    pub fn new_pretty<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            pretty: true,
            ..Self::new(path)?
        })
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            pretty: false,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn write_record(&self, record: &Record) -> Result<()> {
        let line = JsonLine {
            timestamp: self.timestamp_format.to_json_value(&record.timestamp),
            level: record.level,
            message: &record.message,
            thread: record.thread_label(),
            fields: &record.fields,
        };
        let json = if self.pretty {
            serde_json::to_string_pretty(&line)?
        } else {
            serde_json::to_string(&line)?
        };

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()?;
        Ok(())
    }
}

impl Appender for JsonAppender {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&self, _ctx: &Context, level: LogLevel, fields: &Fields, message: &str) {
        if let Err(e) = self.write_record(&Record::new(level, message, fields)) {
            eprintln!("[JOURNAL ERROR] JSON append failed: {}", e);
        }
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_appender() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let appender = JsonAppender::new(&log_path)?;
        let fields = Fields::new()
            .with_field("user_id", 123)
            .with_field("action", "login");

        appender.append(&Context::background(), LogLevel::Info, &fields, "User logged in");
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let parsed: serde_json::Value = serde_json::from_str(content.trim_end())?;
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["message"], "User logged in");
        assert_eq!(parsed["fields"]["user_id"], 123);
        assert_eq!(parsed["fields"]["action"], "login");

        Ok(())
    }

    #[test]
    fn test_entry_reaches_file_without_flush() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("unflushed.jsonl");

        let appender = JsonAppender::new(&log_path)?;
        appender.append(&Context::background(), LogLevel::Error, &Fields::new(), "kept");

        let content = fs::read_to_string(&log_path)?;
        assert!(content.contains("\"message\":\"kept\""), "{}", content);
        // the appender is still alive, nothing was dropped or flushed by hand
        drop(appender);
        Ok(())
    }

    #[test]
    fn test_json_appender_multiple_entries() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test_multiple.jsonl");

        let appender = JsonAppender::new(&log_path)?.with_timestamp_format(TimestampFormat::Unix);
        let ctx = Context::background();

        for i in 0..5 {
            let fields = Fields::new().with_field("iteration", i);
            appender.append(&ctx, LogLevel::Debug, &fields, &format!("Iteration {}", i));
        }
        appender.append(&ctx, LogLevel::Warn, &Fields::new(), "no fields");
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);

        for line in &lines {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert!(parsed["message"].is_string());
            assert!(parsed["timestamp"].is_number());
        }

        let last: serde_json::Value = serde_json::from_str(lines[5])?;
        assert!(last.get("fields").is_none());

        Ok(())
    }

    #[test]
    fn test_pretty_output_spans_lines() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("pretty.json");

        let appender = JsonAppender::new_pretty(&log_path)?;
        appender.append(&Context::background(), LogLevel::Error, &Fields::new(), "boom");
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        assert!(content.lines().count() > 1);
        assert!(content.contains("\"message\": \"boom\""));
        Ok(())
    }
}
