//! CLI frontend for Termagotchi, the terminal pet that lives in a fake shell.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tg",
    about = "Termagotchi: a virtual pet living in a pretend shell",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell session on stdin/stdout
    Repl {
        /// Load a filesystem document before the first prompt
        #[arg(short, long)]
        import: Option<PathBuf>,

        /// Export the filesystem to this file on exit
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Seconds between passive decay ticks (0 disables decay)
        #[arg(long, default_value = "60")]
        decay_secs: u64,

        /// Name of the pet
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Run shell commands non-interactively and print the transcript
    Exec {
        /// Command lines to run, in order
        commands: Vec<String>,

        /// Read additional command lines from a file (one per line)
        #[arg(long)]
        script: Option<PathBuf>,

        /// Load a filesystem document first
        #[arg(short, long)]
        import: Option<PathBuf>,

        /// Write the resulting filesystem to this file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Print the pet's counters afterwards
        #[arg(short, long)]
        pet: bool,
    },

    /// Print or write the boot filesystem document
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a filesystem document
    Check {
        /// Document to check
        file: PathBuf,
    },

    /// Launch the full-screen terminal UI
    Tui {
        /// Load a filesystem document on start
        #[arg(short, long)]
        import: Option<PathBuf>,

        /// File used by export/import shortcuts
        #[arg(long)]
        save_path: Option<PathBuf>,

        /// Seconds between passive decay ticks (0 disables decay)
        #[arg(long)]
        decay_secs: Option<u64>,

        /// Name of the pet
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl {
            import,
            save,
            decay_secs,
            name,
        } => commands::repl::run(import.as_deref(), save.as_deref(), decay_secs, name),
        Commands::Exec {
            commands: lines,
            script,
            import,
            export,
            pet,
        } => commands::exec::run(
            &lines,
            script.as_deref(),
            import.as_deref(),
            export.as_deref(),
            pet,
        ),
        Commands::Export { output } => commands::export::run(output.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Tui {
            import,
            save_path,
            decay_secs,
            name,
        } => commands::tui::run(
            import.as_deref(),
            save_path.as_deref(),
            decay_secs,
            name.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
