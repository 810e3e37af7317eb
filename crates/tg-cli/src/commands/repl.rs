use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use colored::Colorize;

use tg_shell::{DisplaySink, SessionShell, ShellConfig};

/// Writes session output straight to stdout.
struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn append(&mut self, line: &str) {
        println!("{line}");
    }

    fn clear(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
    }

    fn echo(&mut self, command: &str) {
        println!("{}", format!("$ {command}").dimmed());
    }

    fn notice(&mut self, line: &str) {
        println!("{}", line.cyan());
    }

    fn error(&mut self, line: &str) {
        println!("{}", line.red());
    }
}

pub fn run(
    import: Option<&Path>,
    save: Option<&Path>,
    decay_secs: u64,
    name: Option<String>,
) -> Result<(), String> {
    let mut config = ShellConfig::default().with_decay_secs(decay_secs);
    if let Some(name) = name {
        config = config.with_pet_name(name);
    }

    let mut session = SessionShell::new(&config, StdoutSink);
    session.boot(Instant::now());
    if let Some(path) = import {
        // The shell keeps the boot filesystem when the import fails.
        if let Err(e) = super::import_file(&mut session, path) {
            eprintln!("{} {e}", "warning:".yellow().bold());
        }
    }
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{} ", ">".bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        // Time spent at the prompt still counts towards decay.
        session.tick(Instant::now());
        session.submit(&line);
    }

    session.shutdown();
    println!();

    if let Some(path) = save {
        super::export_file(&session, path)?;
        println!("  Saved to {}", path.display());
    }

    Ok(())
}
