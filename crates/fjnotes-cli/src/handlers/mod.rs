pub mod board;
pub mod column;
pub mod task;

/// Deletes need an explicit `--yes`.
pub(crate) fn require_confirmation(confirmed: bool, what: &str) -> anyhow::Result<()> {
    if !confirmed {
        anyhow::bail!("Refusing to delete {} without --yes", what);
    }
    Ok(())
}
