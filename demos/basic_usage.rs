//! Basic usage example
//!
//! A context carries the level and the appender; entries pick up explicit
//! fields through the entry builder.
//!
//! Run with: cargo run --example basic_usage

use context_journal::prelude::*;

fn main() -> Result<()> {
    println!("=== Context Journal - Basic Usage Example ===\n");

    let ctx = Context::background()
        .with_level(LogLevel::Info)
        .with_appender(ConsoleAppender::new());

    println!("1. Logging at different levels (Debug is filtered):");
    context_journal::info(&ctx, &["Hello %s".into(), "Bob".into()]);
    context_journal::debug(&ctx, &["You will not see this".into()]);
    context_journal::warn(&ctx, &["Disk at %d%%".into(), 91.into()]);
    context_journal::error(&ctx, &["Lost connection to %s".into(), "db-1".into()]);

    println!("\n2. Explicit fields:");
    context_journal::with_fields([("size", FieldValue::from(1)), ("location", "Austin".into())])
        .warn(&ctx, &["Hello %s".into(), "Mary".into()]);

    println!("\n3. The plain writer layout on stdout:");
    let plain = ctx.with_appender(WriterAppender::stdout());
    context_journal::info(&plain, &["Hello %s".into(), "Bob".into()]);
    context_journal::with_field("size", 2).warn(&plain, &["Hello %s".into(), "Mary".into()]);

    println!("\n4. A logger bound to a context:");
    let logger = Logger::new(plain);
    logger.infof("%d planets found", &[8.into()]);
    logger.println(&["100%".into(), "done".into()]);

    println!("\n5. Levels parsed from text:");
    let level: LogLevel = "warning".parse()?;
    println!("parsed {:?}, enabled on ctx: {}", level, context_journal::enabled(&ctx, level));

    println!("\n=== Example completed successfully ===");
    Ok(())
}
