use super::require_confirmation;
use crate::cli::TaskAction;
use crate::context::CliContext;
use crate::output::ChangeResponse;
use chrono::{DateTime, NaiveDate, Utc};
use fjnotes_domain::BoardOperations;

pub fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<serde_json::Value> {
    let value = match action {
        TaskAction::Add { column, title, due } => {
            let due_date = due.map(start_of_day);
            to_value(ctx.engine.add_task(column, &title, due_date)?)?
        }
        TaskAction::Delete { column, id, yes } => {
            require_confirmation(yes, "a task")?;
            to_value(ctx.engine.delete_task(id, column)?)?
        }
        TaskAction::Move {
            id,
            from,
            to,
            position,
        } => to_value(ctx.engine.move_task(id, from, to, position)?)?,
        TaskAction::Progress { column, id, value } => {
            to_value(ctx.engine.update_progress(id, column, &value)?)?
        }
        TaskAction::Priority { column, id } => to_value(ctx.engine.cycle_priority(id, column)?)?,
        TaskAction::Rename { column, id, title } => {
            to_value(ctx.engine.rename_task(id, column, &title)?)?
        }
        TaskAction::Comment {
            column,
            id,
            text,
            author,
        } => {
            let author = author.unwrap_or_else(|| ctx.config.effective_author().to_string());
            to_value(ctx.engine.add_comment(id, column, &author, &text)?)?
        }
    };
    Ok(value)
}

fn to_value<T: serde::Serialize>(item: Option<T>) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(ChangeResponse::from(item))?)
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
