//! Info command - Show version and rule order
//!
//! Usage:
//! ```bash
//! algoscope info
//! ```

use algoscope_core::{algorithm::algorithm_rules, RuleProfile};
use anyhow::Result;
use clap::Args;
use colored::Colorize;

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs;

/// Run the info command
pub fn run(_args: InfoArgs) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    println!("{}", "algoscope".bold().cyan());
    println!("{}", "═".repeat(40).cyan());
    println!();

    println!("{}", "Version Information:".bold());
    println!("  {} {}", "CLI Version:".dimmed(), version.green());
    println!();

    println!("{}", "Language rules (first match wins):".bold());
    for (i, rule) in RuleProfile::Standard.language_rules().iter().enumerate() {
        print_rule(i + 1, rule.label.name(), rule.name);
    }
    println!();

    println!("{}", "Algorithm rules (first match wins):".bold());
    for (i, rule) in algorithm_rules().iter().enumerate() {
        print_rule(i + 1, rule.label.name(), rule.name);
    }
    println!();

    println!("{}", "Configuration:".bold());
    println!(
        "  {} ALGOSCOPE_RULE_PROFILE=legacy switches the JavaScript signature",
        "ℹ".blue()
    );

    Ok(())
}

fn print_rule(position: usize, label: &str, name: &str) {
    println!(
        "  {}. {} {}",
        position,
        label.green(),
        format!("({})", name).dimmed()
    );
}
