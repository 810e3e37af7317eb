//! Standalone TUI binary for Termagotchi.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tg_shell::ShellConfig;

#[derive(Parser)]
#[command(name = "tg-tui", about = "Terminal UI for Termagotchi", version)]
struct Args {
    /// Load a filesystem document on start
    #[arg(long)]
    import: Option<PathBuf>,

    /// File used by Ctrl+S (export) and Ctrl+O (import)
    #[arg(long, default_value = "fs.json")]
    save_path: PathBuf,

    /// Seconds between passive decay ticks (0 disables decay)
    #[arg(long, default_value = "60")]
    decay_secs: u64,

    /// Name of the pet
    #[arg(long)]
    name: Option<String>,

    /// Write logs to this file (the screen is never used for logs)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<(), String> {
    let file =
        File::create(path).map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let mut config = ShellConfig::default().with_decay_secs(args.decay_secs);
    if let Some(name) = args.name {
        config = config.with_pet_name(name);
    }

    let mut app = tg_tui::app::TuiApp::new(&config, args.save_path);
    app.boot(Instant::now());
    if let Some(path) = &args.import {
        // A failed import is shown in the log; the boot filesystem stays.
        app.import_from(path);
    }

    tg_tui::terminal::run(app)
}
