use crate::context::CliContext;
use crate::output::ListResponse;
use chrono::NaiveDate;
use fjnotes_domain::BoardOperations;
use serde_json::json;

pub fn show(ctx: &CliContext) -> anyhow::Result<serde_json::Value> {
    let history = ctx.engine.history();
    Ok(json!({
        "columns": ctx.engine.board(),
        "taskCount": ctx.engine.board().task_count(),
        "history": {
            "entries": history.len(),
            "cursor": history.cursor(),
            "canUndo": history.can_undo(),
            "canRedo": history.can_redo(),
        },
    }))
}

pub fn undo(ctx: &mut CliContext) -> anyhow::Result<serde_json::Value> {
    let changed = ctx.engine.undo()?;
    Ok(json!({ "changed": changed, "cursor": ctx.engine.history().cursor() }))
}

pub fn redo(ctx: &mut CliContext) -> anyhow::Result<serde_json::Value> {
    let changed = ctx.engine.redo()?;
    Ok(json!({ "changed": changed, "cursor": ctx.engine.history().cursor() }))
}

pub fn search(ctx: &CliContext, query: &str) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(ListResponse::new(ctx.engine.search(query)))?)
}

pub fn overdue(ctx: &CliContext, today: Option<NaiveDate>) -> anyhow::Result<serde_json::Value> {
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
    Ok(serde_json::to_value(ListResponse::new(
        ctx.engine.overdue_tasks(today),
    ))?)
}
