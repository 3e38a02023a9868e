use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tick_core::Storage;

mod config;
mod parser;
mod session;
mod state;
mod ui;

#[derive(Parser, Debug)]
#[command(name = "tick", version, about = "Track todos, deadlines, and events from the terminal")]
struct Cli {
    /// Task file to use instead of the configured default (~/.tick/tasks.txt)
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flag wins over config, config over the default location.
    let data_file = match cli.file {
        Some(path) => path,
        None => match config::load_config()?.storage.data_file {
            Some(path) => path,
            None => state::default_tasks_path()?,
        },
    };

    session::run(Storage::new(data_file))
}
