//! Context-supplied fields and the merge with explicit entry fields
//!
//! A context may carry one [`FieldSource`] in one of three shapes:
//!
//! - `Static`: a fixed mapping, shared by every call
//! - `Lazy`: a producer invoked afresh on every emitted call
//! - `Contextual`: a producer that sees the context, the level, the explicit
//!   fields (mutably, so it can consume them) and the call arguments
//!
//! Sourced fields overwrite explicit fields of the same name. This ordering
//! is kept for compatibility with existing callers; an explicit field cannot
//! shadow a context field.

use super::{context::Context, fields::Fields, log_level::LogLevel, message::Arg};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub type LazyFields = dyn Fn() -> Fields + Send + Sync;

pub type ContextualFields =
    dyn for<'c, 'f, 'a, 'b> Fn(&'c Context, LogLevel, &'f mut Fields, &'a [Arg<'b>]) -> Fields
        + Send
        + Sync;

#[derive(Clone)]
pub enum FieldSource {
    Static(Fields),
    Lazy(Arc<LazyFields>),
    Contextual(Arc<ContextualFields>),
}

impl FieldSource {
    /// A source that calls `producer` on every emitted log call
    ///
    /// # Example
    ///
    /// ```
    /// use context_journal::{FieldSource, Fields};
    ///
    /// let source = FieldSource::lazy(|| Fields::new().with_field("galaxy", "Milky Way"));
    /// ```
    pub fn lazy<F>(producer: F) -> Self
    where
        F: Fn() -> Fields + Send + Sync + 'static,
    {
        FieldSource::Lazy(Arc::new(producer))
    }

    /// A source that inspects the call before producing fields
    ///
    /// The producer may remove keys from the explicit fields it receives;
    /// the removal is visible in the final mapping.
    ///
    /// # Example
    ///
    /// ```
    /// use context_journal::{FieldSource, Fields};
    ///
    /// let source = FieldSource::contextual(|_ctx, _level, explicit: &mut Fields, _args| {
    ///     match explicit.remove("z-value").and_then(|z| z.as_i64()) {
    ///         Some(z) => Fields::new().with_field("point", vec![1, -1, z]),
    ///         None => Fields::new().with_field("point", vec![1, -1]),
    ///     }
    /// });
    /// ```
    pub fn contextual<F>(producer: F) -> Self
    where
        F: for<'c, 'f, 'a, 'b> Fn(&'c Context, LogLevel, &'f mut Fields, &'a [Arg<'b>]) -> Fields
            + Send
            + Sync
            + 'static,
    {
        FieldSource::Contextual(Arc::new(producer))
    }

    fn kind(&self) -> &'static str {
        match self {
            FieldSource::Static(_) => "static",
            FieldSource::Lazy(_) => "lazy",
            FieldSource::Contextual(_) => "contextual",
        }
    }
}

impl fmt::Debug for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSource::Static(fields) => f.debug_tuple("Static").field(fields).finish(),
            other => f.debug_tuple(other.kind()).finish(),
        }
    }
}

impl From<Fields> for FieldSource {
    fn from(fields: Fields) -> Self {
        FieldSource::Static(fields)
    }
}

/// Overlay `sourced` onto `explicit`; sourced values win on conflict.
///
/// When either side is empty the other is returned as is, so no mapping is
/// built or copied.
pub fn merge<'s>(explicit: Cow<'s, Fields>, sourced: Cow<'s, Fields>) -> Cow<'s, Fields> {
    if sourced.is_empty() {
        return explicit;
    }
    if explicit.is_empty() {
        return sourced;
    }

    let mut merged = explicit.into_owned();
    match sourced {
        Cow::Borrowed(fields) => {
            merged.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Cow::Owned(fields) => merged.extend(fields),
    }
    Cow::Owned(merged)
}

/// Produce the final field mapping for one emitted call.
///
/// Only call this once the entry is known to be emitted: lazy and
/// contextual producers run here. `explicit` stays borrowed unless a
/// contextual producer needs it mutably or both sides have to be merged.
pub fn resolve_fields<'s>(
    ctx: &'s Context,
    level: LogLevel,
    mut explicit: Cow<'s, Fields>,
    source: Option<&'s FieldSource>,
    args: &[Arg<'_>],
) -> Cow<'s, Fields> {
    let sourced = match source {
        None => return explicit,
        Some(FieldSource::Static(fields)) => Cow::Borrowed(fields),
        Some(FieldSource::Lazy(producer)) => Cow::Owned(producer()),
        Some(FieldSource::Contextual(producer)) => {
            Cow::Owned(producer(ctx, level, explicit.to_mut(), args))
        }
    };
    merge(explicit, sourced)
}
