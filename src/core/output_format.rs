//! Line layouts shared by the bundled appenders
//!
//! - Plain: `[LEVEL] message k=v ...`, the layout the facade has always
//!   written to plain writers
//! - Text: Plain prefixed with a timestamp and the thread
//! - Json: one JSON object per entry
//! - Logfmt: key=value pairs

use super::fields::FieldValue;
use super::record::Record;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Example: `[INFO] Request processed status=200`
    #[default]
    Plain,

    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] main - Request processed status=200`
    Text,

    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"INFO","message":"Request processed","status":200}`
    Json,

    /// Example: `timestamp=2025-01-08T10:30:45.123Z level=INFO message="Request processed" status=200`
    Logfmt,
}

impl OutputFormat {
    /// Render `record` as a single line, without the trailing newline
    pub fn format(&self, record: &Record, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Plain => format_plain(record),
            OutputFormat::Text => format_text(record, timestamp_format),
            OutputFormat::Json => format_json(record, timestamp_format),
            OutputFormat::Logfmt => format_logfmt(record, timestamp_format),
        }
    }
}

fn format_plain(record: &Record) -> String {
    if record.fields.is_empty() {
        format!("[{}] {}", record.level, record.message)
    } else {
        format!("[{}] {} {}", record.level, record.message, record.fields)
    }
}

fn format_text(record: &Record, timestamp_format: &TimestampFormat) -> String {
    let base = format!(
        "[{}] [{:5}] {} - {}",
        timestamp_format.format(&record.timestamp),
        record.level.to_str(),
        record.thread_label(),
        record.message
    );

    if record.fields.is_empty() {
        base
    } else {
        format!("{} {}", base, record.fields)
    }
}

/// Fields never replace the reserved keys
fn format_json(record: &Record, timestamp_format: &TimestampFormat) -> String {
    let mut object = serde_json::Map::new();

    for (key, value) in &record.fields {
        object.insert(key.clone(), value.to_json_value());
    }

    object.insert(
        "timestamp".to_string(),
        timestamp_format.to_json_value(&record.timestamp),
    );
    object.insert("level".to_string(), record.level.to_str().into());
    object.insert("message".to_string(), record.message.clone().into());
    object.insert("thread".to_string(), record.thread_label().into());

    serde_json::Value::Object(object).to_string()
}

fn format_logfmt(record: &Record, timestamp_format: &TimestampFormat) -> String {
    let mut parts = vec![
        format!(
            "timestamp={}",
            escape_logfmt_value(&timestamp_format.format(&record.timestamp))
        ),
        format!("level={}", record.level.to_str()),
        format!("message={}", quote_logfmt_value(&record.message)),
        format!("thread={}", escape_logfmt_value(record.thread_label())),
    ];

    for (key, value) in &record.fields {
        let rendered = match value {
            FieldValue::String(s) => escape_logfmt_value(s),
            FieldValue::List(_) => quote_logfmt_value(&value.to_string()),
            other => other.to_string(),
        };
        parts.push(format!("{}={}", escape_logfmt_key(key), rendered));
    }

    parts.join(" ")
}

fn escape_logfmt_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
        .collect()
}

fn escape_logfmt_value(value: &str) -> String {
    if value.is_empty() || value.contains([' ', '"', '=']) {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
