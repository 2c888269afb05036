//! Catalog command - Print the complexity and note tables
//!
//! Usage:
//! ```bash
//! algoscope catalog
//! algoscope catalog --json
//! ```

use algoscope_core::{complexity_entries, note_of, Language};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

/// Arguments for the catalog command
#[derive(Args)]
pub struct CatalogArgs {
    /// Print the tables as JSON
    #[arg(long)]
    json: bool,
}

/// Run the catalog command
pub fn run(args: CatalogArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog_json())?);
        return Ok(());
    }

    println!("{}", "Algorithms".bold().cyan());
    println!("{}", algorithm_table());
    println!();
    println!("{}", "Languages (detection order)".bold().cyan());
    println!("{}", language_table());

    Ok(())
}

fn algorithm_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Algorithm").fg(Color::Cyan),
            Cell::new("Time").fg(Color::Cyan),
            Cell::new("Space").fg(Color::Cyan),
        ]);

    for (algorithm, entry) in complexity_entries() {
        table.add_row(vec![
            Cell::new(algorithm.name()).fg(Color::Green),
            Cell::new(entry.time),
            Cell::new(entry.space),
        ]);
    }

    table
}

fn language_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Language").fg(Color::Cyan),
            Cell::new("Note").fg(Color::Cyan),
        ]);

    for language in Language::ALL {
        table.add_row(vec![
            Cell::new(language.name()).fg(Color::Green),
            Cell::new(note_of(language)),
        ]);
    }

    table
}

fn catalog_json() -> serde_json::Value {
    let algorithms: Vec<serde_json::Value> = complexity_entries()
        .map(|(algorithm, entry)| {
            serde_json::json!({
                "name": algorithm.name(),
                "timeComplexity": entry.time,
                "spaceComplexity": entry.space,
            })
        })
        .collect();

    let languages: Vec<serde_json::Value> = Language::ALL
        .iter()
        .map(|l| serde_json::json!({ "name": l.name(), "note": note_of(*l) }))
        .collect();

    serde_json::json!({ "algorithms": algorithms, "languages": languages })
}
