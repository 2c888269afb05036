//! Algorithm detection
//!
//! Cheap lexical signatures, tried in order: binary search, quick sort, merge
//! sort. Anything else is unknown. Stylistically unusual code will be
//! misclassified; that is accepted behavior for this detector.

use crate::label::Algorithm;
use crate::rule::{first_match, Signature, SignatureRule};

use Signature::{AllOf, AnyOf, Contains};

static ALGORITHM_RULES: &[SignatureRule<Algorithm>] = &[
    // Named helper, or low/high/mid bounds driven by a loop or bounds check
    SignatureRule::new(
        "binary_search",
        Algorithm::BinarySearch,
        AnyOf(&[
            Contains("binarySearch"),
            AllOf(&[
                Contains("low"),
                Contains("high"),
                Contains("mid"),
                AnyOf(&[Contains("while"), Contains("if (low <= high)")]),
            ]),
        ]),
    ),
    // Named helper, or pivot + partition with a recursive call
    SignatureRule::new(
        "quick_sort",
        Algorithm::QuickSort,
        AnyOf(&[
            Contains("quickSort"),
            AllOf(&[
                Contains("pivot"),
                Contains("partition"),
                AnyOf(&[Contains("quickSort("), Contains("return quickSort")]),
            ]),
        ]),
    ),
    SignatureRule::new(
        "merge_sort",
        Algorithm::MergeSort,
        AnyOf(&[
            Contains("merge"),
            AllOf(&[Contains("sort"), Contains("mid"), Contains("merge(")]),
        ]),
    ),
];

/// Algorithm rules in evaluation order
pub fn algorithm_rules() -> &'static [SignatureRule<Algorithm>] {
    ALGORITHM_RULES
}

/// Detect the algorithm; `None` means "Unknown Algorithm"
pub fn detect_algorithm(code: &str) -> Option<Algorithm> {
    matching_rule(code).map(|rule| rule.label)
}

/// The rule that decided the algorithm, if any
pub fn matching_rule(code: &str) -> Option<&'static SignatureRule<Algorithm>> {
    first_match(ALGORITHM_RULES, code)
}
