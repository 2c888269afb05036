//! # algoscope core
//!
//! Rule-based classification of source snippets:
//! - [`detect_language`]: first-match-wins language signatures
//! - [`detect_algorithm`]: lexical algorithm signatures
//! - [`complexity_of`] / [`note_of`]: static lookup tables
//! - [`Classifier`]: validation and result assembly
//!
//! ```
//! use algoscope_core::{classify, Algorithm, Language};
//!
//! let result = classify("#include <iostream>\nint binarySearch(int* a, int n);").unwrap();
//! assert_eq!(result.language, Language::Cpp);
//! assert_eq!(result.algorithm, Some(Algorithm::BinarySearch));
//! assert_eq!(result.time_complexity, "O(log n)");
//! ```

pub mod algorithm;
pub mod classify;
pub mod error;
pub mod label;
pub mod language;
pub mod rule;
pub mod tables;

pub use algorithm::detect_algorithm;
pub use classify::{
    classify, ClassificationRequest, ClassificationResult, Classifier, ClassifierConfig,
};
pub use error::ClassificationError;
pub use label::{algorithm_label, Algorithm, Language, UnknownLabel, UNKNOWN_ALGORITHM};
pub use language::{detect_language, detect_language_with, RuleProfile};
pub use rule::{Signature, SignatureRule};
pub use tables::{
    complexity_entries, complexity_of, lookup_algorithm, note_for, note_of, ComplexityEntry,
    FALLBACK_NOTE, UNKNOWN_COMPLEXITY,
};
