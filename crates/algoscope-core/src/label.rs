//! Classification labels
//!
//! Both label sets are closed. "No language" and "unknown algorithm" are
//! modelled as `Option::None` by the detectors rather than as extra variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display text used when no algorithm signature matched
pub const UNKNOWN_ALGORITHM: &str = "Unknown Algorithm";

/// Programming languages the detector can recognise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "C++")]
    Cpp,
    Java,
    Python,
    Ruby,
    JavaScript,
    C,
}

impl Language {
    /// Every language, in detection-rule order
    pub const ALL: [Language; 6] = [
        Language::Cpp,
        Language::Java,
        Language::Python,
        Language::Ruby,
        Language::JavaScript,
        Language::C,
    ];

    /// Wire and display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::Ruby => "Ruby",
            Language::JavaScript => "JavaScript",
            Language::C => "C",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Algorithms the detector can recognise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "Binary Search")]
    BinarySearch,
    #[serde(rename = "Merge Sort")]
    MergeSort,
    #[serde(rename = "Quick Sort")]
    QuickSort,
}

impl Algorithm {
    /// Every algorithm, in complexity-table order
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BinarySearch,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    /// Wire and display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Name of a detected algorithm, or [`UNKNOWN_ALGORITHM`]
pub fn algorithm_label(algorithm: Option<Algorithm>) -> &'static str {
    algorithm.map(|a| a.name()).unwrap_or(UNKNOWN_ALGORITHM)
}

/// A label name outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label: {0}")]
pub struct UnknownLabel(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>().unwrap(), lang);
        }
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert!("c++".parse::<Language>().is_err());
        assert!("merge sort".parse::<Algorithm>().is_err());
        assert!(" Quick Sort".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_unknown_algorithm_label() {
        assert_eq!(algorithm_label(None), "Unknown Algorithm");
        assert_eq!(algorithm_label(Some(Algorithm::QuickSort)), "Quick Sort");
    }

    #[test]
    fn test_language_serializes_by_display_name() {
        let json = serde_json::to_string(&Language::Cpp).unwrap();
        assert_eq!(json, "\"C++\"");
        let json = serde_json::to_string(&Algorithm::BinarySearch).unwrap();
        assert_eq!(json, "\"Binary Search\"");
    }
}
