use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "fjnotes")]
#[command(about = "A kanban task board with undo and redo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the board state (or set FJNOTES_DIR env var)
    #[arg(long, value_name = "DIR", env = "FJNOTES_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the whole board
    Show,
    /// Column operations
    Column(ColumnCommand),
    /// Task operations
    Task(TaskCommand),
    /// Step back to the previous saved state
    Undo,
    /// Step forward again after an undo
    Redo,
    /// Find tasks by title
    Search {
        query: String,
    },
    /// List unfinished tasks that are past their due date
    Overdue {
        /// Reference date (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Column commands
#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Append a new column
    Add {
        #[arg(long)]
        title: String,
    },
    /// Delete a column and every task in it
    Delete {
        #[arg(long)]
        id: Uuid,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to a column
    Add {
        #[arg(long)]
        column: Uuid,
        #[arg(long)]
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        column: Uuid,
        #[arg(long)]
        id: Uuid,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Move a task to another column
    Move {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        from: Uuid,
        #[arg(long)]
        to: Uuid,
        /// Position in the destination column (defaults to the end)
        #[arg(long)]
        position: Option<usize>,
    },
    /// Set task progress (0-100)
    Progress {
        #[arg(long)]
        column: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Advance task priority (High → Medium → Low → High)
    Priority {
        #[arg(long)]
        column: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Rename a task
    Rename {
        #[arg(long)]
        column: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Comment on a task
    Comment {
        #[arg(long)]
        column: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        text: String,
        /// Comment author (defaults to the configured author)
        #[arg(long)]
        author: Option<String>,
    },
}
