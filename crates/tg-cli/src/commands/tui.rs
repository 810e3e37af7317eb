//! Launch the tg-tui standalone binary.

use std::path::Path;

/// Launch the tg-tui binary with the given session options.
pub fn run(
    import: Option<&Path>,
    save_path: Option<&Path>,
    decay_secs: Option<u64>,
    name: Option<&str>,
) -> Result<(), String> {
    let mut command = std::process::Command::new("tg-tui");
    if let Some(path) = import {
        command.arg("--import").arg(path);
    }
    if let Some(path) = save_path {
        command.arg("--save-path").arg(path);
    }
    if let Some(secs) = decay_secs {
        command.arg("--decay-secs").arg(secs.to_string());
    }
    if let Some(name) = name {
        command.arg("--name").arg(name);
    }

    match command.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("tg-tui exited with {s}")),
        Err(_) => {
            Err("tg-tui binary not found. Install with: cargo install --path crates/tg-tui".into())
        }
    }
}
