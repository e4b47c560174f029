//! `bangbang show` and `bangbang rename`.

use serde::Serialize;

use crate::board::Board;
use crate::error::Result;
use crate::output::emit_success;

use super::Context;

pub fn run_show(ctx: Context) -> Result<()> {
    let engine = ctx.engine();
    let board = engine.board()?;

    emit_success(ctx.json, ctx.quiet, "show", &board, format_board)
}

pub fn run_rename(ctx: Context, title: String) -> Result<()> {
    let engine = ctx.engine();
    engine.rename_board(&title)?;

    #[derive(Serialize)]
    struct Renamed {
        title: String,
    }

    let data = Renamed { title };
    emit_success(ctx.json, ctx.quiet, "rename", &data, |data| {
        format!("Board renamed to \"{}\"", data.title)
    })
}

fn format_board(board: &Board) -> String {
    let mut lines = Vec::new();
    lines.push(board.title.clone());

    for column in &board.columns {
        lines.push(String::new());
        lines.push(format!("{} [{}]", column.title, column.id));
        for task in &column.tasks {
            let comments = if task.comments.is_empty() {
                String::new()
            } else {
                format!(" ({} comments)", task.comments.len())
            };
            lines.push(format!("  - {} [{}]{}", task.title, task.id, comments));
        }
        if column.tasks.is_empty() {
            lines.push("  (empty)".to_string());
        }
    }

    lines.join("\n")
}
