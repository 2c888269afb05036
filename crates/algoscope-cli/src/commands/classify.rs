//! Classify command - Report language, algorithm and complexity
//!
//! Usage:
//! ```bash
//! algoscope classify search.java
//! algoscope classify - < sort.rb
//! algoscope classify app.js --algorithm "Quick Sort" --json
//! ```

use algoscope_core::{
    algorithm, algorithm_label, language, ClassificationRequest, ClassificationResult,
    Classifier, ClassifierConfig, RuleProfile,
};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the classify command
#[derive(Args)]
pub struct ClassifyArgs {
    /// Source file to classify; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Assert the algorithm instead of detecting it
    #[arg(long, short = 'a', value_name = "NAME")]
    algorithm: Option<String>,

    /// Language rule profile (standard or legacy)
    #[arg(long, default_value = "standard", env = "ALGOSCOPE_RULE_PROFILE")]
    profile: RuleProfile,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Run the classify command
pub fn run(args: ClassifyArgs) -> Result<()> {
    let code = read_source(args.file.as_ref())?;
    let classifier = Classifier::new(ClassifierConfig::new().with_profile(args.profile));

    let result = match args.algorithm {
        Some(name) => {
            let request = ClassificationRequest::new(code.clone()).with_algorithm(name);
            classifier.classify_asserted(&request)?
        }
        None => classifier.classify(&ClassificationRequest::new(code.clone()))?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result, &code, args.profile));
    }

    Ok(())
}

/// Read the snippet from a file, or stdin for `None` / `-`
fn read_source(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Human-readable report, including the rules that fired
fn render_report(result: &ClassificationResult, code: &str, profile: RuleProfile) -> String {
    let language_rule = language::matching_rule(profile, code)
        .map(|r| r.name)
        .unwrap_or("-");
    let algorithm_rule = algorithm::matching_rule(code)
        .map(|r| r.name)
        .unwrap_or("-");

    let algorithm = match result.algorithm {
        Some(_) => algorithm_label(result.algorithm).green().bold(),
        None => algorithm_label(None).yellow(),
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Classification".bold().cyan()));
    out.push_str(&format!("{}\n", "═".repeat(40).cyan()));
    out.push_str(&format!(
        "  {} {} {}\n",
        "Language:".dimmed(),
        result.language.to_string().green().bold(),
        format!("(rule: {})", language_rule).dimmed()
    ));
    out.push_str(&format!(
        "  {} {} {}\n",
        "Algorithm:".dimmed(),
        algorithm,
        format!("(rule: {})", algorithm_rule).dimmed()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Time complexity:".dimmed(),
        result.time_complexity
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Space complexity:".dimmed(),
        result.space_complexity
    ));
    out.push_str(&format!("  {} {}\n", "Note:".dimmed(), result.note));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_core::classify;

    #[test]
    fn test_report_names_rules() {
        colored::control::set_override(false);
        let code = "def merge(a, b): pass";
        let result = classify(code).unwrap();
        let report = render_report(&result, code, RuleProfile::Standard);

        assert!(report.contains("Language: Python (rule: python)"));
        assert!(report.contains("Algorithm: Merge Sort (rule: merge_sort)"));
        assert!(report.contains("Time complexity: O(n log n)"));
    }

    #[test]
    fn test_report_unknown_algorithm() {
        colored::control::set_override(false);
        let code = "puts 'hi'";
        let result = classify(code).unwrap();
        let report = render_report(&result, code, RuleProfile::Standard);

        assert!(report.contains("Algorithm: Unknown Algorithm (rule: -)"));
        assert!(report.contains("Space complexity: Unknown"));
    }

    #[test]
    fn test_read_missing_file() {
        let path = PathBuf::from("/definitely/not/here.cpp");
        let err = read_source(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read source file"));
    }
}
