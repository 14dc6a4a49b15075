//! Appender trait for log output destinations

use super::{context::Context, error::Result, fields::Fields, log_level::LogLevel};

/// The backend that renders or transports an emitted entry.
///
/// `append` is called at most once per emitted log call, synchronously, on
/// the caller's thread. There is no error channel back to the caller: an
/// appender that fails reports it through its own means.
pub trait Appender: Send + Sync {
    fn append(&self, ctx: &Context, level: LogLevel, fields: &Fields, message: &str);

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<F> Appender for F
where
    F: Fn(&Context, LogLevel, &Fields, &str) + Send + Sync,
{
    fn append(&self, ctx: &Context, level: LogLevel, fields: &Fields, message: &str) {
        self(ctx, level, fields, message)
    }

    fn name(&self) -> &str {
        "fn"
    }
}
