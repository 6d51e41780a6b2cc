mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("FJNOTES_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "fjnotes", &mut std::io::stdout());
        return Ok(());
    }

    let mut ctx = match CliContext::open(cli.data_dir) {
        Ok(ctx) => ctx,
        Err(e) => output::output_error(&e.to_string()),
    };

    let result = match cli.command {
        Commands::Show => handlers::board::show(&ctx),
        Commands::Column(column_cmd) => handlers::column::handle(&mut ctx, column_cmd.action),
        Commands::Task(task_cmd) => handlers::task::handle(&mut ctx, task_cmd.action),
        Commands::Undo => handlers::board::undo(&mut ctx),
        Commands::Redo => handlers::board::redo(&mut ctx),
        Commands::Search { query } => handlers::board::search(&ctx, &query),
        Commands::Overdue { today } => handlers::board::overdue(&ctx, today),
        Commands::Completions { .. } => unreachable!("handled before the board is opened"),
    };

    match result {
        Ok(data) => output::output_success(data, ctx.take_warning()),
        Err(e) => output::output_error(&e.to_string()),
    }
}
