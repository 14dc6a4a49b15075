//! Console appender implementation

use crate::core::{
    Appender, Context, Fields, LogLevel, OutputFormat, Record, Result, TimestampFormat,
};
use colored::Colorize;

/// Timestamped, optionally colored terminal output.
///
/// `Error` and more severe entries go to stderr, the rest to stdout.
pub struct ConsoleAppender {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::Text,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use context_journal::appenders::ConsoleAppender;
    /// use context_journal::OutputFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use context_journal::appenders::ConsoleAppender;
    /// use context_journal::TimestampFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    fn render(&self, record: &Record) -> String {
        match self.output_format {
            OutputFormat::Text if self.use_colors => self.format_colored(record),
            format => format.format(record, &self.timestamp_format),
        }
    }

    fn format_colored(&self, record: &Record) -> String {
        let level = format!("{:5}", record.level.to_str())
            .color(record.level.color_code())
            .to_string();

        let base = format!(
            "[{}] [{}] {} - {}",
            self.timestamp_format.format(&record.timestamp),
            level,
            record.thread_label(),
            record.message
        );

        if record.fields.is_empty() {
            base
        } else {
            format!("{} {}", base, record.fields.format_fields().dimmed())
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, _ctx: &Context, level: LogLevel, fields: &Fields, message: &str) {
        let output = self.render(&Record::new(level, message, fields));

        if level.is_enabled_at(LogLevel::Error) {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
    }

    fn flush(&self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncolored_render_matches_text_format() {
        let appender = ConsoleAppender::with_colors(false).with_timestamp_format(TimestampFormat::Unix);
        let record = Record::new(LogLevel::Warn, "disk", &Fields::new().with_field("pct", 91));

        assert_eq!(
            appender.render(&record),
            OutputFormat::Text.format(&record, &TimestampFormat::Unix)
        );
    }

    #[test]
    fn test_colored_render_keeps_content() {
        let appender = ConsoleAppender::new();
        let record = Record::new(LogLevel::Error, "boom", &Fields::new().with_field("code", 500));
        let rendered = appender.render(&record);

        assert!(rendered.contains("ERROR"));
        assert!(rendered.contains("boom"));
        assert!(rendered.contains("code=500"));
    }

    #[test]
    fn test_append_does_not_fail() {
        let appender = ConsoleAppender::with_colors(false);
        appender.append(&Context::background(), LogLevel::Info, &Fields::new(), "console test");
        assert!(appender.flush().is_ok());
    }
}
