//! Entry builder for attaching fields before the context is known
//!
//! # Example
//!
//! ```
//! use context_journal::prelude::*;
//! use std::sync::Arc;
//!
//! let appender = Arc::new(MemoryAppender::new());
//! let ctx = Context::background()
//!     .with_level(LogLevel::Info)
//!     .with_shared_appender(appender.clone());
//!
//! context_journal::with_field("size", 2)
//!     .with_field("location", "Austin")
//!     .warn(&ctx, &["Hello %s".into(), "Mary".into()]);
//!
//! assert_eq!(appender.contents(), "[WARN] Hello Mary location=Austin size=2\n");
//! ```

use super::{
    context::Context,
    dispatch::dispatch,
    fields::{FieldValue, Fields},
    log_level::LogLevel,
    message::Arg,
};
use std::error::Error as StdError;

/// Key under which [`Entry::with_error`] stores the error message
pub const ERROR_KEY: &str = "error";

/// Explicit fields waiting for a terminal level call
///
/// Field methods consume and return the entry; the level methods borrow it,
/// so one entry can be emitted any number of times. Each emission works on
/// its own copy of the fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    fields: Fields,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field; an existing key is overwritten
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }

    /// Add several fields; existing keys are overwritten
    #[must_use]
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.extend(fields);
        self
    }

    /// Store the error's message under [`ERROR_KEY`]
    #[must_use]
    pub fn with_error(mut self, err: &dyn StdError) -> Self {
        self.fields.insert(ERROR_KEY, err.to_string());
        self
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Emit at `level` with this entry's fields
    pub fn log<'c>(&self, ctx: impl Into<Option<&'c Context>>, level: LogLevel, args: &[Arg<'_>]) {
        dispatch(ctx, level, Some(&self.fields), args);
    }

    #[inline]
    pub fn debug<'c>(&self, ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
        self.log(ctx, LogLevel::Debug, args);
    }

    #[inline]
    pub fn info<'c>(&self, ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
        self.log(ctx, LogLevel::Info, args);
    }

    #[inline]
    pub fn print<'c>(&self, ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
        self.log(ctx, LogLevel::Info, args);
    }

    #[inline]
    pub fn warn<'c>(&self, ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
        self.log(ctx, LogLevel::Warn, args);
    }

    #[inline]
    pub fn error<'c>(&self, ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
        self.log(ctx, LogLevel::Error, args);
    }

    #[inline]
    pub fn fatal<'c>(&self, ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
        self.log(ctx, LogLevel::Fatal, args);
    }

    #[inline]
    pub fn panic<'c>(&self, ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
        self.log(ctx, LogLevel::Panic, args);
    }
}

impl From<Fields> for Entry {
    fn from(fields: Fields) -> Self {
        Self { fields }
    }
}

/// Start an entry with one field
pub fn with_field<K, V>(key: K, value: V) -> Entry
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    Entry::new().with_field(key, value)
}

/// Start an entry with several fields
pub fn with_fields<I, K, V>(fields: I) -> Entry
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    Entry::new().with_fields(fields)
}

/// Start an entry carrying an error message under [`ERROR_KEY`]
pub fn with_error(err: &dyn StdError) -> Entry {
    Entry::new().with_error(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::field_source::FieldSource;
    use std::sync::Arc;

    fn memory_context() -> (Arc<MemoryAppender>, Context) {
        let appender = Arc::new(MemoryAppender::new());
        let ctx = Context::background()
            .with_level(LogLevel::Debug)
            .with_shared_appender(appender.clone());
        (appender, ctx)
    }

    #[test]
    fn test_fields_last_write_wins() {
        let entry = with_field("size", 1)
            .with_fields([("size", 2), ("count", 3)])
            .with_field("count", 4);

        assert_eq!(entry.fields().get("size"), Some(&FieldValue::Int(2)));
        assert_eq!(entry.fields().get("count"), Some(&FieldValue::Int(4)));
    }

    #[test]
    fn test_with_error() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "disk gone");
        let entry = with_error(&err);

        assert_eq!(
            entry.fields().get(ERROR_KEY),
            Some(&FieldValue::String("disk gone".to_string()))
        );
    }

    #[test]
    fn test_terminal_calls_forward_fields() {
        let (appender, ctx) = memory_context();

        with_field("size", 2).info(&ctx, &["Hello %s".into(), "Alice".into()]);
        with_fields([("size", 1)]).error(&ctx, &["Hello %s".into(), "Mary".into()]);

        assert_eq!(
            appender.lines(),
            vec![
                "[INFO] Hello Alice size=2".to_string(),
                "[ERROR] Hello Mary size=1".to_string(),
            ]
        );
    }

    #[test]
    fn test_reuse_is_independent() {
        let (appender, ctx) = memory_context();
        let ctx = ctx.with_field_source(FieldSource::contextual(|_, _, explicit: &mut Fields, _| {
            match explicit.remove("size") {
                Some(size) => Fields::new().with_field("derived", size),
                None => Fields::new(),
            }
        }));
        let entry = with_field("size", 3);

        entry.info(&ctx, &["first".into()]);
        entry.info(&ctx, &["second".into()]);

        // the source consumed "size" each time from a fresh copy
        assert_eq!(
            appender.lines(),
            vec!["[INFO] first derived=3".to_string(), "[INFO] second derived=3".to_string()]
        );
        assert!(entry.fields().contains_key("size"));
    }

    #[test]
    fn test_entry_respects_threshold() {
        let (appender, ctx) = memory_context();
        let ctx = ctx.with_level(LogLevel::Warn);

        with_field("k", "v").debug(&ctx, &["hidden".into()]);
        with_field("k", "v").print(&ctx, &["hidden".into()]);
        with_field("k", "v").warn(&ctx, &["shown".into()]);

        assert_eq!(appender.lines(), vec!["[WARN] shown k=v".to_string()]);
    }
}
