//! Static complexity and note tables
//!
//! Built once on first access and read-only afterwards.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::label::{Algorithm, Language};

/// Complexity text used when the algorithm is unknown
pub const UNKNOWN_COMPLEXITY: &str = "Unknown";

/// Note used for languages missing from the note table
pub const FALLBACK_NOTE: &str = "No specific notes available for this language.";

/// Textbook time and space bounds for an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityEntry {
    pub time: &'static str,
    pub space: &'static str,
}

impl ComplexityEntry {
    pub const UNKNOWN: ComplexityEntry = ComplexityEntry {
        time: UNKNOWN_COMPLEXITY,
        space: UNKNOWN_COMPLEXITY,
    };
}

// Quick Sort carries its worst-case time bound.
static COMPLEXITY_TABLE: Lazy<BTreeMap<Algorithm, ComplexityEntry>> = Lazy::new(|| {
    BTreeMap::from([
        (
            Algorithm::BinarySearch,
            ComplexityEntry {
                time: "O(log n)",
                space: "O(1)",
            },
        ),
        (
            Algorithm::MergeSort,
            ComplexityEntry {
                time: "O(n log n)",
                space: "O(n)",
            },
        ),
        (
            Algorithm::QuickSort,
            ComplexityEntry {
                time: "O(n^2)",
                space: "O(log n)",
            },
        ),
    ])
});

static NOTE_TABLE: Lazy<HashMap<Language, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Language::Cpp, "C++ is optimized with STL for common algorithms."),
        (
            Language::Java,
            "Java provides efficient libraries like Collections Framework.",
        ),
        (
            Language::Python,
            "Python relies on Timsort for sorting and has high-level simplicity.",
        ),
        (Language::Ruby, "Ruby\u{2019}s sort methods are based on Quicksort."),
        (Language::JavaScript, "JavaScript is optimized for web performance."),
        (Language::C, "C is a low-level language allowing fine-grained control."),
    ])
});

/// Complexity for a detected algorithm; unknown maps to `Unknown`/`Unknown`
pub fn complexity_of(algorithm: Option<Algorithm>) -> ComplexityEntry {
    algorithm
        .and_then(|a| COMPLEXITY_TABLE.get(&a).copied())
        .unwrap_or(ComplexityEntry::UNKNOWN)
}

/// Look up an algorithm by its exact complexity-table key
pub fn lookup_algorithm(name: &str) -> Option<Algorithm> {
    name.parse::<Algorithm>()
        .ok()
        .filter(|a| COMPLEXITY_TABLE.contains_key(a))
}

/// All complexity entries in table order
pub fn complexity_entries() -> impl Iterator<Item = (Algorithm, ComplexityEntry)> {
    COMPLEXITY_TABLE.iter().map(|(a, e)| (*a, *e))
}

/// Note for a language
pub fn note_of(language: Language) -> &'static str {
    NOTE_TABLE.get(&language).copied().unwrap_or(FALLBACK_NOTE)
}

/// Note for a language name, or [`FALLBACK_NOTE`]
pub fn note_for(name: &str) -> &'static str {
    name.parse::<Language>()
        .map(note_of)
        .unwrap_or(FALLBACK_NOTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_literals() {
        assert_eq!(
            complexity_of(Some(Algorithm::BinarySearch)),
            ComplexityEntry {
                time: "O(log n)",
                space: "O(1)",
            }
        );
        assert_eq!(
            complexity_of(Some(Algorithm::MergeSort)),
            ComplexityEntry {
                time: "O(n log n)",
                space: "O(n)",
            }
        );
        assert_eq!(
            complexity_of(Some(Algorithm::QuickSort)),
            ComplexityEntry {
                time: "O(n^2)",
                space: "O(log n)",
            }
        );
    }

    #[test]
    fn test_unknown_complexity() {
        assert_eq!(complexity_of(None), ComplexityEntry::UNKNOWN);
        assert_eq!(complexity_of(None).time, "Unknown");
    }

    #[test]
    fn test_every_algorithm_has_an_entry() {
        assert_eq!(complexity_entries().count(), Algorithm::ALL.len());
    }

    #[test]
    fn test_lookup_algorithm() {
        assert_eq!(lookup_algorithm("Merge Sort"), Some(Algorithm::MergeSort));
        assert_eq!(lookup_algorithm("Heap Sort"), None);
        assert_eq!(lookup_algorithm("Unknown Algorithm"), None);
        // exact key only
        assert_eq!(lookup_algorithm("merge sort"), None);
        assert_eq!(lookup_algorithm(" Merge Sort"), None);
    }

    #[test]
    fn test_notes() {
        for lang in Language::ALL {
            assert_ne!(note_of(lang), FALLBACK_NOTE, "missing note for {}", lang);
        }
        assert_eq!(note_of(Language::Ruby), "Ruby’s sort methods are based on Quicksort.");
        assert_eq!(note_for("Go"), FALLBACK_NOTE);
        assert_eq!(note_for("javascript"), FALLBACK_NOTE);
        assert_eq!(note_for("JavaScript"), note_of(Language::JavaScript));
    }
}
