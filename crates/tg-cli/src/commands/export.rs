use std::path::Path;

use tg_shell::{ShellConfig, ShellState};

pub fn run(output: Option<&Path>) -> Result<(), String> {
    // A freshly booted session: boot layout with the status file rendered.
    let state = ShellState::new(&ShellConfig::default());
    let content = state
        .fs()
        .serialize()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
