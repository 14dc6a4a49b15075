//! Per-call logging context
//!
//! A [`Context`] carries the three optional attachments that drive a log
//! call: the level threshold, the appender and the field source. It may
//! also carry typed request-scoped values that field sources and appenders
//! can read back.
//!
//! Contexts are immutable. Every `with_*` method returns a derived context
//! and leaves the receiver untouched, so a context can be shared across
//! threads once built. Anything not attached falls back to the process
//! defaults held by [`Config`](super::config::Config).
//!
//! # Example
//!
//! ```
//! use context_journal::{Context, LogLevel, MemoryAppender};
//! use std::sync::Arc;
//!
//! let appender = Arc::new(MemoryAppender::new());
//! let parent = Context::background().with_shared_appender(appender.clone());
//! let child = parent.with_level(LogLevel::Debug);
//!
//! context_journal::debug(&child, &["Hello %s".into(), "Bob".into()]);
//! context_journal::debug(&parent, &["dropped".into()]);
//!
//! assert_eq!(appender.contents(), "[DEBUG] Hello Bob\n");
//! ```

use super::{
    appender::Appender,
    config::{self, Config},
    field_source::FieldSource,
    fields::{FieldValue, Fields},
    log_level::LogLevel,
};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type ValueMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

#[derive(Clone, Default)]
pub struct Context {
    level: Option<LogLevel>,
    appender: Option<Arc<dyn Appender>>,
    field_source: Option<FieldSource>,
    values: Option<Arc<ValueMap>>,
    derived: bool,
}

impl Context {
    /// The well-known empty context
    pub fn background() -> Self {
        Self::default()
    }

    /// True only for a context that has never been derived from
    pub fn is_background(&self) -> bool {
        !self.derived
    }

    fn derive(&self) -> Self {
        let mut child = self.clone();
        child.derived = true;
        child
    }

    /// Derive a context with a level threshold
    #[must_use]
    pub fn with_level(&self, level: LogLevel) -> Self {
        let mut child = self.derive();
        child.level = Some(level);
        child
    }

    /// Derive a context that logs to `appender`
    #[must_use]
    pub fn with_appender<A: Appender + 'static>(&self, appender: A) -> Self {
        self.with_shared_appender(Arc::new(appender))
    }

    /// Derive a context that logs to an appender shared with other contexts
    #[must_use]
    pub fn with_shared_appender(&self, appender: Arc<dyn Appender>) -> Self {
        let mut child = self.derive();
        child.appender = Some(appender);
        child
    }

    /// Derive a context with a field source, replacing any inherited one
    #[must_use]
    pub fn with_field_source(&self, source: FieldSource) -> Self {
        let mut child = self.derive();
        child.field_source = Some(source);
        child
    }

    /// Shortcut for a static field source built from `fields`
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with_field_source(FieldSource::Static(fields.into_iter().collect::<Fields>()))
    }

    /// Derive a context carrying `value`, retrievable with [`Context::value`].
    /// A value of the same type attached earlier is shadowed.
    #[must_use]
    pub fn with_value<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut child = self.derive();
        let mut values = self
            .values
            .as_ref()
            .map(|values| values.as_ref().clone())
            .unwrap_or_default();
        values.insert(TypeId::of::<T>(), Arc::new(value));
        child.values = Some(Arc::new(values));
        child
    }

    pub fn value<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .as_ref()?
            .get(&TypeId::of::<T>())?
            .downcast_ref::<T>()
    }

    /// The level attached to this context, without default fallback
    pub fn level(&self) -> Option<LogLevel> {
        self.level
    }

    /// The appender attached to this context, without default fallback
    pub fn appender(&self) -> Option<&Arc<dyn Appender>> {
        self.appender.as_ref()
    }

    pub fn field_source(&self) -> Option<&FieldSource> {
        self.field_source.as_ref()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("background", &self.is_background())
            .field("level", &self.level)
            .field("appender", &self.appender.as_ref().map(|a| a.name().to_string()))
            .field("field_source", &self.field_source)
            .field("values", &self.values.as_ref().map_or(0, |v| v.len()))
            .finish()
    }
}

/// The level threshold in effect for `ctx`, falling back to the installed
/// default level. `None` stands for the default context.
pub fn level_of<'c>(ctx: impl Into<Option<&'c Context>>) -> LogLevel {
    let config = config::current();
    level_in(ctx.into().unwrap_or_else(|| config.context()), config)
}

/// The appender in effect for `ctx`. The background context always resolves
/// to the default appender. `None` means no default appender is installed
/// either.
pub fn appender_of<'c>(ctx: impl Into<Option<&'c Context>>) -> Option<&'c Arc<dyn Appender>> {
    let config = config::current();
    appender_in(ctx.into().unwrap_or_else(|| config.context()), config)
}

pub fn field_source_of<'c>(ctx: impl Into<Option<&'c Context>>) -> Option<&'c FieldSource> {
    ctx.into()
        .unwrap_or_else(|| config::current().context())
        .field_source()
}

pub(crate) fn level_in(ctx: &Context, config: &Config) -> LogLevel {
    ctx.level.unwrap_or_else(|| config.level())
}

pub(crate) fn appender_in<'a>(ctx: &'a Context, config: &'a Config) -> Option<&'a Arc<dyn Appender>> {
    if ctx.is_background() {
        return config.appender();
    }
    ctx.appender.as_ref().or_else(|| config.appender())
}
