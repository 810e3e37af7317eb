use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tg_core::fs::STATUS_PATH;
use tg_core::{Node, VirtualFilesystem};

pub fn run(file: &Path) -> Result<(), String> {
    let text = super::read_text(file)?;
    let fs = VirtualFilesystem::deserialize(&text)
        .map_err(|e| format!("invalid filesystem document {}: {e}", file.display()))?;

    let files: Vec<(String, &str)> = fs
        .walk()
        .into_iter()
        .filter_map(|(path, node)| node.as_file().map(|text| (path, text)))
        .collect();

    if files.is_empty() {
        println!("  No files.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Path", "Bytes", "First line"]);

        for (path, contents) in &files {
            let first = contents.lines().next().unwrap_or("");
            let first = if first.chars().count() > 40 {
                format!("{}...", first.chars().take(37).collect::<String>())
            } else if first.is_empty() {
                "—".to_string()
            } else {
                first.to_string()
            };
            table.add_row(vec![path.clone(), contents.len().to_string(), first]);
        }

        println!("{table}");
        println!();
    }

    println!(
        "  {} directories, {} files",
        fs.directory_count(),
        fs.file_count()
    );

    if !fs.lookup(STATUS_PATH).is_some_and(Node::is_file) {
        println!(
            "  {} no {STATUS_PATH}; it will be created on the next command",
            "warning:".yellow()
        );
    }

    println!("  All checks passed for '{}'.", file.display());
    Ok(())
}
