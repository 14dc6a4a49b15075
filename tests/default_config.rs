//! Process defaults: an installed level and appender apply to the
//! background context, to derived contexts without their own appender, and
//! to calls made without a context.
//!
//! The configuration is process-wide, so this binary installs it exactly
//! once and keeps the output assertions in a single test.

use context_journal::appenders::MemoryAppender;
use context_journal::prelude::*;
use context_journal::{appender_of, field_source_of, level_of};
use std::sync::{Arc, OnceLock};

fn install_defaults() -> Arc<MemoryAppender> {
    static APPENDER: OnceLock<Arc<MemoryAppender>> = OnceLock::new();
    APPENDER
        .get_or_init(|| {
            let appender = Arc::new(MemoryAppender::new());
            Config::builder()
                .level(LogLevel::Debug)
                .shared_appender(appender.clone())
                .install()
                .expect("first install succeeds");
            appender
        })
        .clone()
}

#[test]
fn test_default_appender() {
    let appender = install_defaults();

    let ctx = Context::background();
    context_journal::error(&ctx, &["Hello %s".into(), "Bob".into()]);

    let ctx = ctx.with_level(LogLevel::Error);
    context_journal::info(&ctx, &["Hello %s".into(), "Alice".into()]);
    context_journal::error(&ctx, &["Hello %s %s".into(), "Mary".into(), "Kay".into()]);

    context_journal::debug(None, &["Goodbye %d".into(), 3.into()]);

    assert_eq!(
        appender.contents(),
        "[ERROR] Hello Bob\n[ERROR] Hello Mary Kay\n[DEBUG] Goodbye 3\n"
    );
}

#[test]
fn test_second_install_is_rejected() {
    install_defaults();

    let result = Config::builder().level(LogLevel::Panic).install();
    assert!(matches!(result, Err(LoggerError::AlreadyInitialized)));
    assert_eq!(level_of(&Context::background()), LogLevel::Debug);
}

#[test]
fn test_accessors_fall_back_to_defaults() {
    install_defaults();

    let background = Context::background();
    assert_eq!(appender_of(&background).map(|a| a.name()), Some("memory"));

    // a derived context keeps its own appender, the background one never does
    let own = Context::background().with_appender(WriterAppender::new(Vec::<u8>::new()));
    assert_eq!(appender_of(&own).map(|a| a.name()), Some("writer"));
    assert_eq!(level_of(&own), LogLevel::Debug);
    assert!(context_journal::enabled(None, LogLevel::Debug));
}

#[test]
fn test_accessors_accept_missing_context() {
    install_defaults();

    assert_eq!(level_of(None), LogLevel::Debug);
    assert_eq!(appender_of(None).map(|a| a.name()), Some("memory"));
    assert!(field_source_of(None).is_none());
}
