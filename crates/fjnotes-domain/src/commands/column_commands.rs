use super::{required_text, Command, CommandContext};
use crate::{Column, ColumnId};
use fjnotes_core::FjnotesResult;

/// Append a new, empty column
pub struct CreateColumn {
    pub title: String,
}

impl Command for CreateColumn {
    type Output = Column;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Column>> {
        let title = required_text("Column title", &self.title)?;
        let column = Column::new(title);
        context.board.columns.push(column.clone());
        Ok(Some(column))
    }

    fn description(&self) -> String {
        format!("Create column: '{}'", self.title.trim())
    }
}

/// Delete a column together with all of its tasks
pub struct DeleteColumn {
    pub column_id: ColumnId,
}

impl Command for DeleteColumn {
    type Output = Column;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Column>> {
        let columns = &mut context.board.columns;
        Ok(columns
            .iter()
            .position(|c| c.id == self.column_id)
            .map(|index| columns.remove(index)))
    }

    fn description(&self) -> String {
        format!("Delete column {}", self.column_id)
    }
}
