//! Default appender example
//!
//! Contexts without an appender, and calls without a context, fall back to
//! the installed defaults.
//!
//! Run with: cargo run --example default_appender

use context_journal::prelude::*;

fn main() -> Result<()> {
    Config::builder()
        .level(LogLevel::Info)
        .appender(WriterAppender::stderr().with_output_format(OutputFormat::Json))
        .install()?;

    // No context at all: the default context and appender apply.
    context_journal::with_fields([("size", FieldValue::from(2)), ("location", "Boston".into())])
        .error(None, &["Hello %s".into(), "Bob".into()]);

    // A context with a level but no appender still uses the default appender.
    let ctx = Context::background().with_level(LogLevel::Info);
    context_journal::info(&ctx, &["Hello %s".into(), "Mary".into()]);

    // Once the context has its own appender, that one wins.
    let ctx = ctx.with_appender(WriterAppender::stdout());
    context_journal::with_fields([("size", FieldValue::from(1)), ("location", "Austin".into())])
        .warn(&ctx, &["Hello %s".into(), "Alice".into()]);

    Ok(())
}
