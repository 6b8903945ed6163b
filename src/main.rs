use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bptree_db::repl;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "bptree-db", version = VERSION, about = "Tiny single-file B+tree database.")]
struct Cli {
    /// Path to the database file. Created if it doesn't exist.
    db_path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open("bptree-db.log")
        .expect("Failed to open log file");

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let Some(db_path) = cli.db_path else {
        println!("Must supply a database filename.");
        return ExitCode::FAILURE;
    };

    match repl::start(&db_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
