use std::path::Path;

use colored::Colorize;

use tg_core::PetState;
use tg_core::pet::STAT_MAX;
use tg_shell::{BufferSink, SessionShell, ShellConfig};

pub fn run(
    commands: &[String],
    script: Option<&Path>,
    import: Option<&Path>,
    export: Option<&Path>,
    pet: bool,
) -> Result<(), String> {
    let mut lines: Vec<String> = commands.to_vec();
    if let Some(path) = script {
        let text = super::read_text(path)?;
        lines.extend(text.lines().map(str::to_string));
    }

    // Batch runs are instantaneous; passive decay never fires.
    let config = ShellConfig::default().without_decay();
    let mut session = SessionShell::new(&config, BufferSink::new());

    if let Some(path) = import {
        super::import_file(&mut session, path)?;
    }
    for line in &lines {
        session.submit(line);
    }

    for out in session.sink().lines() {
        println!("{out}");
    }

    if pet {
        print_pet(session.state().pet());
    }

    if let Some(path) = export {
        super::export_file(&session, path)?;
        println!("  Exported to {}", path.display());
    }

    Ok(())
}

fn print_pet(pet: &PetState) {
    println!();
    println!("  Hunger     {} ({})", format_stat_bar(pet.hunger, true), pet.hunger_mood());
    println!(
        "  Happiness  {} ({})",
        format_stat_bar(pet.happiness, false),
        pet.happiness_mood()
    );
    if let Some(flavor) = pet.flavor() {
        println!("  {}", flavor.line(tg_core::pet::DEFAULT_PET_NAME).italic());
    }
}

/// Render a counter as a ten-cell bar. For hunger high is bad; for happiness
/// low is bad.
fn format_stat_bar(value: i32, high_is_bad: bool) -> String {
    let filled = usize::try_from(value.clamp(0, STAT_MAX)).unwrap_or(0);
    let empty = usize::try_from(STAT_MAX).unwrap_or(0).saturating_sub(filled);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));

    let badness = if high_is_bad { value } else { STAT_MAX - value };
    let colored_bar = if badness >= 8 {
        bar.red()
    } else if badness >= 6 {
        bar.yellow()
    } else {
        bar.green()
    };
    format!("[{colored_bar}] {value:>2}/{STAT_MAX}")
}
