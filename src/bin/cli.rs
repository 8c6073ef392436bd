use std::io;
use std::path::PathBuf;

use clap::Parser;
use timetable_viewer::{RecordStore, Session};
use tracing_subscriber::EnvFilter;

/// Browse class timetables exported as CSV files.
#[derive(Parser, Debug)]
#[command(name = "timetable-viewer", version, about, long_about = None)]
struct Args {
    /// Folder of CSV exports to load before showing the menu
    #[arg(long, env = "TIMETABLE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    // Logs go to stderr; stdout carries the menu and tables.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut store = RecordStore::new();
    if let Some(dir) = &args.data_dir {
        match store.load(dir) {
            Ok(summary) => println!(
                "Loaded {} records from {}",
                summary.records_loaded,
                dir.display()
            ),
            Err(err) => eprintln!("Could not preload {}: {err}", dir.display()),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, stdin.lock(), stdout.lock());
    session.run()
}
