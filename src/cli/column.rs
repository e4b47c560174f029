//! `bangbang column <add|rename|rm|order>`.

use serde::Serialize;

use crate::error::Result;
use crate::output::emit_success;

use super::Context;

#[derive(Serialize)]
struct ColumnRef {
    id: String,
}

pub fn run_add(ctx: Context, title: String) -> Result<()> {
    let engine = ctx.engine();
    let column = engine.create_column(&title)?;

    emit_success(ctx.json, ctx.quiet, "column add", &column, |column| {
        format!("Created column \"{}\" [{}]", column.title, column.id)
    })
}

pub fn run_rename(ctx: Context, id: String, title: String) -> Result<()> {
    let engine = ctx.engine();
    engine.update_column_title(&id, &title)?;

    let data = ColumnRef { id };
    emit_success(ctx.json, ctx.quiet, "column rename", &data, |data| {
        format!("Renamed column [{}]", data.id)
    })
}

pub fn run_rm(ctx: Context, id: String) -> Result<()> {
    let engine = ctx.engine();
    engine.delete_column(&id)?;

    let data = ColumnRef { id };
    emit_success(ctx.json, ctx.quiet, "column rm", &data, |data| {
        format!("Removed column [{}]", data.id)
    })
}

pub fn run_order(ctx: Context, ids: Vec<String>) -> Result<()> {
    let engine = ctx.engine();
    engine.reorder_columns(&ids)?;

    #[derive(Serialize)]
    struct Ordered {
        columns: Vec<String>,
    }

    let data = Ordered { columns: ids };
    emit_success(ctx.json, ctx.quiet, "column order", &data, |data| {
        format!("Column order: {}", data.columns.join(", "))
    })
}
