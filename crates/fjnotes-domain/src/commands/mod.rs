use fjnotes_core::FjnotesResult;

pub mod column_commands;
pub mod task_commands;

pub use column_commands::*;
pub use task_commands::*;

/// A single change to the board.
///
/// `execute` returns `Ok(Some(output))` when the board changed,
/// `Ok(None)` when a target was missing or the change would be a no-op, and
/// `Err(Validation)` for unusable input. In the last two cases the board is
/// left exactly as it was.
pub trait Command {
    type Output;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Self::Output>>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub board: &'a mut crate::Board,
}

/// Trimmed `input`, or a validation error naming `field` when nothing is left.
pub(crate) fn required_text(field: &str, input: &str) -> FjnotesResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(fjnotes_core::FjnotesError::validation(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}
