//! Context fields example
//!
//! Shows the three field source shapes: a static mapping, a producer
//! called per entry, and a producer that inspects the call.
//!
//! Run with: cargo run --example context_fields

use context_journal::prelude::*;

fn main() {
    let ctx = Context::background()
        .with_level(LogLevel::Info)
        .with_appender(WriterAppender::stdout());

    // Static fields: the planet's name and color.
    let planet = ctx.with_fields([("name", FieldValue::from("Venus")), ("color", 0x00ff00.into())]);
    context_journal::info(&planet, &["Discovered planet".into()]);

    // A producer called for every emitted entry.
    let galactic = ctx.with_field_source(FieldSource::lazy(|| {
        Fields::new()
            .with_field("galaxy", "Milky Way")
            .with_field("distance", 42)
    }));
    context_journal::info(&galactic, &["Discovered planet".into()]);

    // A producer that turns an explicit "z-value" into a third dimension.
    let located = ctx.with_field_source(FieldSource::contextual(|_ctx, _level, fields: &mut Fields, _args| {
        match fields.remove("z-value").and_then(|z| z.as_i64()) {
            Some(z) => Fields::new().with_field("point", vec![1, -1, z]),
            None => Fields::new().with_field("point", vec![1, -1]),
        }
    }));

    // point=[1 -1]
    context_journal::info(&located, &["Discovered planet".into()]);
    // point=[1 -1 3]
    context_journal::with_field("z-value", 3).info(&located, &["Discovered planet".into()]);
}
