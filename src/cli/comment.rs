//! `bangbang comment <add|rm>`.

use serde::Serialize;

use crate::error::Result;
use crate::output::emit_success;

use super::Context;

pub fn run_add(ctx: Context, column: String, card: String, text: String) -> Result<()> {
    let engine = ctx.engine();
    let comment = engine.create_comment(&column, &card, &text)?;

    emit_success(ctx.json, ctx.quiet, "comment add", &comment, |comment| {
        format!("Added comment [{}] at {}", comment.id, comment.created_at)
    })
}

pub fn run_rm(ctx: Context, column: String, card: String, id: String) -> Result<()> {
    let engine = ctx.engine();
    engine.delete_comment(&column, &card, &id)?;

    #[derive(Serialize)]
    struct CommentRef {
        column: String,
        card: String,
        id: String,
    }

    let data = CommentRef { column, card, id };
    emit_success(ctx.json, ctx.quiet, "comment rm", &data, |data| {
        format!("Removed comment [{}]", data.id)
    })
}
