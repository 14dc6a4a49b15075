//! Core facade types: levels, contexts, fields, formatting and dispatch

pub mod appender;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod field_source;
pub mod fields;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod output_format;
mod printf;
pub mod record;
pub mod timestamp;

pub use appender::Appender;
pub use config::{Config, ConfigBuilder, Settings};
pub use context::{appender_of, field_source_of, level_of, Context};
pub use dispatch::{
    debug, dispatch, enabled, error, fatal, info, panic, print, warn, FATAL_EXIT_CODE,
};
pub use entry::{with_error, with_field, with_fields, Entry, ERROR_KEY};
pub use error::{LoggerError, Result};
pub use field_source::{merge, resolve_fields, FieldSource};
pub use fields::{FieldValue, Fields};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use message::{format_message, Arg};
pub use output_format::OutputFormat;
pub use record::Record;
pub use timestamp::TimestampFormat;
