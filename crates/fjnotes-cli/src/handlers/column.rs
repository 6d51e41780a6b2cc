use super::require_confirmation;
use crate::cli::ColumnAction;
use crate::context::CliContext;
use crate::output::ChangeResponse;
use fjnotes_domain::BoardOperations;

pub fn handle(ctx: &mut CliContext, action: ColumnAction) -> anyhow::Result<serde_json::Value> {
    let response = match action {
        ColumnAction::Add { title } => ChangeResponse::from(ctx.engine.add_column(&title)?),
        ColumnAction::Delete { id, yes } => {
            require_confirmation(yes, "a column")?;
            ChangeResponse::from(ctx.engine.delete_column(id)?)
        }
    };
    Ok(serde_json::to_value(response)?)
}
