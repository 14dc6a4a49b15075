//! Stress tests for concurrent logging through shared contexts
//!
//! These tests verify:
//! - Lines written from many threads are never interleaved
//! - Field sources run exactly once per emitted call under contention
//! - Filtered calls stay free of field source work at high volume

use context_journal::appenders::{MemoryAppender, WriterAppender};
use context_journal::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 16;
const PER_THREAD: usize = 500;

/// Lines from concurrent writers stay whole
#[test]
fn test_file_lines_not_interleaved() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    let appender = Arc::new(WriterAppender::file(&log_file).expect("Failed to create appender"));
    let ctx = Context::background()
        .with_level(LogLevel::Info)
        .with_shared_appender(appender.clone())
        .with_fields([("component", "stress")]);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let ctx = ctx.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    context_journal::info(&ctx, &["worker %d wrote %d".into(), t.into(), i.into()]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    appender.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in lines {
        assert!(line.starts_with("[INFO] worker "), "mangled line: {}", line);
        assert!(line.ends_with(" component=stress"), "mangled line: {}", line);
    }
}

/// Contextual sources are invoked once per emitted call, never for filtered ones
#[test]
fn test_field_source_invocations_under_contention() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&invocations);
    let appender = Arc::new(MemoryAppender::new());
    let ctx = Context::background()
        .with_level(LogLevel::Warn)
        .with_shared_appender(appender.clone())
        .with_field_source(FieldSource::contextual(move |_, level, _, _| {
            counter.fetch_add(1, Ordering::Relaxed);
            Fields::new().with_field("severity", level.to_str())
        }));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let ctx = ctx.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    if i % 2 == 0 {
                        context_journal::warn(&ctx, &["kept %d".into(), i.into()]);
                    } else {
                        context_journal::debug(&ctx, &["dropped %d".into(), i.into()]);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let expected = THREADS * PER_THREAD / 2;
    assert_eq!(invocations.load(Ordering::Relaxed), expected);
    assert_eq!(appender.len(), expected);
    assert!(appender
        .records()
        .iter()
        .all(|record| record.fields.get("severity").and_then(FieldValue::as_str) == Some("WARN")));
}
