//! `bangbang card <add|edit|rm|order>`.

use serde::Serialize;

use crate::error::Result;
use crate::output::emit_success;

use super::Context;

#[derive(Serialize)]
struct CardRef {
    column: String,
    id: String,
}

pub fn run_add(ctx: Context, column: String, title: String, description: String) -> Result<()> {
    let engine = ctx.engine();
    let task = engine.create_card(&column, &title, &description)?;

    emit_success(ctx.json, ctx.quiet, "card add", &task, |task| {
        format!("Created card \"{}\" [{}]", task.title, task.id)
    })
}

pub fn run_edit(
    ctx: Context,
    column: String,
    id: String,
    title: String,
    description: String,
) -> Result<()> {
    let engine = ctx.engine();
    engine.update_card(&column, &id, &title, &description)?;

    let data = CardRef { column, id };
    emit_success(ctx.json, ctx.quiet, "card edit", &data, |data| {
        format!("Updated card [{}]", data.id)
    })
}

pub fn run_rm(ctx: Context, column: String, id: String) -> Result<()> {
    let engine = ctx.engine();
    engine.delete_card(&column, &id)?;

    let data = CardRef { column, id };
    emit_success(ctx.json, ctx.quiet, "card rm", &data, |data| {
        format!("Removed card [{}]", data.id)
    })
}

pub fn run_order(ctx: Context, column: String, ids: Vec<String>) -> Result<()> {
    let engine = ctx.engine();
    engine.reorder_cards(&column, &ids)?;

    #[derive(Serialize)]
    struct Ordered {
        column: String,
        cards: Vec<String>,
    }

    let data = Ordered {
        column,
        cards: ids,
    };
    emit_success(ctx.json, ctx.quiet, "card order", &data, |data| {
        format!("Cards in [{}]: {}", data.column, data.cards.join(", "))
    })
}
