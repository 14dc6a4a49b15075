//! # Context Journal
//!
//! A context-aware logging facade. The log level, the appender that receives
//! entries and the structured fields attached to them all travel with a
//! [`Context`] instead of living in a global logger.
//!
//! ## Features
//!
//! - **Context Driven**: every call takes a context that decides its level,
//!   its appender and its fields
//! - **Pluggable Appenders**: any closure or [`Appender`] implementation
//!   renders or forwards entries
//! - **Field Sources**: static, lazy or context-computed fields, evaluated
//!   only for entries that pass the level check
//! - **Printf Templates**: `"Hello %s"` style messages, or plain
//!   concatenation
//!
//! ## Example
//!
//! ```
//! use context_journal::prelude::*;
//! use std::sync::Arc;
//!
//! let appender = Arc::new(MemoryAppender::new());
//! let ctx = Context::background()
//!     .with_level(LogLevel::Info)
//!     .with_shared_appender(appender.clone())
//!     .with_fields([("service", "billing")]);
//!
//! context_journal::info(&ctx, &["Charged %d cents".into(), 250.into()]);
//! context_journal::debug(&ctx, &["not shown".into()]);
//!
//! assert_eq!(appender.contents(), "[INFO] Charged 250 cents service=billing\n");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    pub use crate::appenders::{JsonAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, Arg, Config, ConfigBuilder, Context, Entry, FieldSource, FieldValue, Fields,
        LogLevel, Logger, LoggerError, OutputFormat, Record, Result, Settings, TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use crate::appenders::ConsoleAppender;
pub use crate::appenders::{JsonAppender, MemoryAppender, WriterAppender};
pub use crate::core::{
    appender_of, debug, dispatch, enabled, error, fatal, field_source_of, format_message,
    info, level_of, merge, panic, print, resolve_fields, warn, with_error,
    with_field, with_fields, Appender, Arg, Config, ConfigBuilder, Context, Entry, FieldSource,
    FieldValue, Fields, LogLevel, Logger, LoggerError, OutputFormat, Record, Result, Settings,
    TimestampFormat, ERROR_KEY, FATAL_EXIT_CODE,
};
