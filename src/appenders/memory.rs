//! In-memory appender for tests and for inspecting output programmatically

use crate::core::{Appender, Context, Fields, LogLevel, OutputFormat, Record, TimestampFormat};
use parking_lot::Mutex;

/// Keeps every appended entry as a [`Record`] along with its rendered line.
///
/// Lines use the plain `[LEVEL] message k=v` layout unless another
/// [`OutputFormat`] is chosen. Share it through an `Arc` to read the output
/// back after logging.
///
/// # Example
///
/// ```
/// use context_journal::prelude::*;
/// use std::sync::Arc;
///
/// let appender = Arc::new(MemoryAppender::new());
/// let ctx = Context::background()
///     .with_level(LogLevel::Debug)
///     .with_shared_appender(appender.clone());
///
/// context_journal::debug(&ctx, &["Goodbye %d".into(), 3.into()]);
///
/// assert_eq!(appender.contents(), "[DEBUG] Goodbye 3\n");
/// assert_eq!(appender.records()[0].level, LogLevel::Debug);
/// ```
#[derive(Debug, Default)]
pub struct MemoryAppender {
    entries: Mutex<Vec<(Record, String)>>,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Everything appended so far, one newline-terminated line per entry
    pub fn contents(&self) -> String {
        self.entries
            .lock()
            .iter()
            .map(|(_, line)| format!("{}\n", line))
            .collect()
    }

    /// Rendered lines, without their newlines
    pub fn lines(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    pub fn records(&self) -> Vec<Record> {
        self.entries.lock().iter().map(|(record, _)| record.clone()).collect()
    }

    /// Take the contents and clear the buffer
    pub fn drain(&self) -> String {
        std::mem::take(&mut *self.entries.lock())
            .into_iter()
            .map(|(_, line)| format!("{}\n", line))
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Appender for MemoryAppender {
    fn append(&self, _ctx: &Context, level: LogLevel, fields: &Fields, message: &str) {
        let record = Record::new(level, message, fields);
        let line = self.output_format.format(&record, &self.timestamp_format);
        self.entries.lock().push((record, line));
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_contents_and_lines() {
        let appender = MemoryAppender::new();
        let ctx = Context::background();

        appender.append(&ctx, LogLevel::Error, &Fields::new(), "Hello Bob");
        appender.append(&ctx, LogLevel::Info, &Fields::new().with_field("size", 2), "Hello Alice");

        assert_eq!(appender.contents(), "[ERROR] Hello Bob\n[INFO] Hello Alice size=2\n");
        assert_eq!(appender.lines(), vec!["[ERROR] Hello Bob", "[INFO] Hello Alice size=2"]);
        assert_eq!(appender.len(), 2);
    }

    #[test]
    fn test_drain_and_clear() {
        let appender = MemoryAppender::new();
        let ctx = Context::background();

        appender.append(&ctx, LogLevel::Warn, &Fields::new(), "first");
        assert_eq!(appender.drain(), "[WARN] first\n");
        assert!(appender.is_empty());

        appender.append(&ctx, LogLevel::Warn, &Fields::new(), "second");
        appender.clear();
        assert_eq!(appender.contents(), "");
    }

    #[test]
    fn test_json_lines() {
        let appender = MemoryAppender::new().with_output_format(OutputFormat::Json);
        appender.append(
            &Context::background(),
            LogLevel::Info,
            &Fields::new().with_field("user", "alice"),
            "login",
        );

        let parsed: serde_json::Value = serde_json::from_str(&appender.lines()[0]).unwrap();
        assert_eq!(parsed["message"], "login");
        assert_eq!(parsed["user"], "alice");
    }

    #[test]
    fn test_concurrent_appends() {
        let appender = Arc::new(MemoryAppender::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let appender = Arc::clone(&appender);
                thread::spawn(move || {
                    let ctx = Context::background();
                    for j in 0..50 {
                        let fields = Fields::new().with_field("thread", i).with_field("seq", j);
                        appender.append(&ctx, LogLevel::Debug, &fields, "tick");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(appender.len(), 400);
        assert!(appender.lines().iter().all(|line| line.starts_with("[DEBUG] tick ")));
    }
}
