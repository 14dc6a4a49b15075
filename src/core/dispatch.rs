//! The dispatch engine and the context-taking level functions
//!
//! Every log call ends up in [`dispatch`], which runs the same sequence:
//!
//! 1. a missing context is replaced by the configured default context
//! 2. the level is compared with the context's threshold; a filtered call
//!    returns here, before any field source or formatting work
//! 3. the appender is resolved; having none is a configuration error and
//!    panics
//! 4. explicit and context-sourced fields are merged
//! 5. the message is formatted
//! 6. the appender receives the entry
//! 7. `Fatal` exits the process with status 1 and `Panic` panics with the
//!    message, both after the appender has seen and flushed the entry

use super::{
    appender::Appender,
    config::{self, Config},
    context::{self, Context},
    error::LoggerError,
    field_source::resolve_fields,
    fields::Fields,
    log_level::LogLevel,
    message::{format_message, Arg},
};
use std::borrow::Cow;
use std::sync::Arc;

/// Exit status used after a `Fatal` entry
pub const FATAL_EXIT_CODE: i32 = 1;

/// Whether a call at `level` on `ctx` would be emitted
pub fn enabled<'c>(ctx: impl Into<Option<&'c Context>>, level: LogLevel) -> bool {
    let config = config::current();
    let ctx = ctx.into().unwrap_or_else(|| config.context());
    level.is_enabled_at(context::level_in(ctx, config))
}

/// Emit one entry.
///
/// `explicit` holds fields gathered before the call (see
/// [`Entry`](super::entry::Entry)); it is only copied when a field source
/// has to change or extend it.
///
/// # Panics
///
/// Panics when no appender can be resolved, and after appending a `Panic`
/// level entry. A `Fatal` level entry terminates the process.
pub fn dispatch<'c>(
    ctx: impl Into<Option<&'c Context>>,
    level: LogLevel,
    explicit: Option<&Fields>,
    args: &[Arg<'_>],
) {
    let config = config::current();
    let ctx = ctx.into().unwrap_or_else(|| config.context());
    dispatch_with(config, ctx, level, explicit, args);
}

fn dispatch_with(
    config: &Config,
    ctx: &Context,
    level: LogLevel,
    explicit: Option<&Fields>,
    args: &[Arg<'_>],
) {
    if !level.is_enabled_at(context::level_in(ctx, config)) {
        return;
    }

    let Some(appender) = context::appender_in(ctx, config) else {
        panic!("{}", LoggerError::MissingAppender);
    };

    let explicit = explicit.map_or_else(|| Cow::Owned(Fields::new()), Cow::Borrowed);
    let fields = resolve_fields(ctx, level, explicit, ctx.field_source(), args);
    let message = format_message(args);

    if config.trace_appends() {
        eprintln!(
            "[JOURNAL TRACE] append: appender={}, level={}, fields={{{}}}, message={}",
            appender.name(),
            level,
            fields,
            message
        );
    }

    appender.append(ctx, level, &fields, &message);

    match level {
        LogLevel::Fatal => {
            flush_before_leaving(appender);
            std::process::exit(FATAL_EXIT_CODE);
        }
        LogLevel::Panic => {
            flush_before_leaving(appender);
            std::panic::panic_any(message)
        }
        _ => {}
    }
}

fn flush_before_leaving(appender: &Arc<dyn Appender>) {
    if let Err(e) = appender.flush() {
        eprintln!("[JOURNAL ERROR] Appender '{}' flush failed: {}", appender.name(), e);
    }
}

/// Emit a `Debug` entry
#[inline]
pub fn debug<'c>(ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
    dispatch(ctx, LogLevel::Debug, None, args);
}

/// Emit an `Info` entry
#[inline]
pub fn info<'c>(ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
    dispatch(ctx, LogLevel::Info, None, args);
}

/// Emit an `Info` entry; alias of [`info`]
#[inline]
pub fn print<'c>(ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
    dispatch(ctx, LogLevel::Info, None, args);
}

/// Emit a `Warn` entry
#[inline]
pub fn warn<'c>(ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
    dispatch(ctx, LogLevel::Warn, None, args);
}

/// Emit an `Error` entry
#[inline]
pub fn error<'c>(ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
    dispatch(ctx, LogLevel::Error, None, args);
}

/// Emit a `Fatal` entry, then exit the process with status 1
#[inline]
pub fn fatal<'c>(ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
    dispatch(ctx, LogLevel::Fatal, None, args);
}

/// Emit a `Panic` entry, then panic with the formatted message
#[inline]
pub fn panic<'c>(ctx: impl Into<Option<&'c Context>>, args: &[Arg<'_>]) {
    dispatch(ctx, LogLevel::Panic, None, args);
}
