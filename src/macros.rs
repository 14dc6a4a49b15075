//! Logging macros that spare call sites the `&[Arg]` slice.
//!
//! Each argument is converted with [`Arg::from`](crate::Arg), so anything the
//! level functions accept works here too. The first argument is a template
//! when it is a string.
//!
//! # Examples
//!
//! ```
//! use context_journal::prelude::*;
//! use context_journal::{error, info};
//! use std::sync::Arc;
//!
//! let appender = Arc::new(MemoryAppender::new());
//! let ctx = Context::background()
//!     .with_level(LogLevel::Error)
//!     .with_shared_appender(appender.clone());
//!
//! error!(&ctx, "Hello %s", "Bob");
//! info!(&ctx, "Hello %s", "Alice");
//! error!(&ctx, "Hello %s %s", "Mary", "Kay");
//!
//! assert_eq!(appender.contents(), "[ERROR] Hello Bob\n[ERROR] Hello Mary Kay\n");
//! ```

/// Emit at an explicit level.
///
/// ```
/// # use context_journal::prelude::*;
/// # let ctx = Context::background().with_level(LogLevel::Debug).with_appender(MemoryAppender::new());
/// use context_journal::log;
/// log!(&ctx, LogLevel::Warn, "disk at %d%%", 91);
/// log!(&ctx, LogLevel::Debug, Arg::text("plain"), "words");
/// ```
#[macro_export]
macro_rules! log {
    ($ctx:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $crate::dispatch($ctx, $level, None, &[$($crate::Arg::from($arg)),+])
    };
}

#[macro_export]
macro_rules! debug {
    ($ctx:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($ctx, $crate::LogLevel::Debug, $($arg),+)
    };
}

#[macro_export]
macro_rules! info {
    ($ctx:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($ctx, $crate::LogLevel::Info, $($arg),+)
    };
}

#[macro_export]
macro_rules! warn {
    ($ctx:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($ctx, $crate::LogLevel::Warn, $($arg),+)
    };
}

#[macro_export]
macro_rules! error {
    ($ctx:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($ctx, $crate::LogLevel::Error, $($arg),+)
    };
}

/// Emit at `Fatal`; the process exits with status 1 afterwards.
#[macro_export]
macro_rules! fatal {
    ($ctx:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($ctx, $crate::LogLevel::Fatal, $($arg),+)
    };
}

/// Emit at `Panic`, then panic with the formatted message.
///
/// Named so it never shadows `std::panic!`.
///
/// ```should_panic
/// # use context_journal::prelude::*;
/// # let ctx = Context::background().with_appender(MemoryAppender::new());
/// use context_journal::panic_log;
/// panic_log!(&ctx, "invariant broken: %s", "queue drained twice");
/// ```
#[macro_export]
macro_rules! panic_log {
    ($ctx:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($ctx, $crate::LogLevel::Panic, $($arg),+)
    };
}
