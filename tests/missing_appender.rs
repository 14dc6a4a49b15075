//! With nothing installed and no appender on the context, an emitted call is
//! a configuration error and panics. Filtered calls never get that far.

use context_journal::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default()
}

#[test]
#[should_panic(expected = "no appender available")]
fn test_background_without_default_appender() {
    context_journal::error(&Context::background(), &["Hello %s".into(), "Bob".into()]);
}

#[test]
fn test_missing_context_without_default_appender() {
    let result = catch_unwind(|| {
        context_journal::panic(None, &["never formatted".into()]);
    });

    let message = panic_message(result.expect_err("must panic"));
    assert!(message.contains("no appender available"), "{}", message);
}

#[test]
fn test_field_source_untouched_when_appender_missing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let ctx = Context::background()
        .with_level(LogLevel::Debug)
        .with_field_source(FieldSource::lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Fields::new()
        }));

    let result = catch_unwind(AssertUnwindSafe(|| {
        context_journal::info(&ctx, &["Hello".into()]);
    }));

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_filtered_call_does_not_need_appender() {
    let ctx = Context::background().with_level(LogLevel::Warn);
    context_journal::debug(&ctx, &["nobody listens".into()]);
    assert!(!context_journal::enabled(&ctx, LogLevel::Info));
    assert!(context_journal::appender_of(&ctx).is_none());
}
