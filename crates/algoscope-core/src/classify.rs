//! Classification orchestrator
//!
//! Validates the request, runs the detectors and joins the result with the
//! static tables. Every call is independent; the same request always yields
//! the same outcome.

use serde::{Deserialize, Serialize};

use crate::algorithm;
use crate::error::ClassificationError;
use crate::label::{Algorithm, Language};
use crate::language::{self, RuleProfile};
use crate::tables::{complexity_of, lookup_algorithm, note_of};

/// Classifier configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Language rule list to use
    #[serde(default)]
    pub profile: RuleProfile,
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: RuleProfile) -> Self {
        self.profile = profile;
        self
    }
}

/// A snippet to classify
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    #[serde(default)]
    pub code: Option<String>,
    /// Caller-asserted algorithm name, honoured only by
    /// [`Classifier::classify_asserted`]
    #[serde(default)]
    pub algorithm: Option<String>,
}

impl ClassificationRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            algorithm: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }
}

/// Classification outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// `None` when no algorithm signature matched
    pub algorithm: Option<Algorithm>,
    pub language: Language,
    pub time_complexity: String,
    pub space_complexity: String,
    pub note: String,
}

impl ClassificationResult {
    fn assemble(language: Language, algorithm: Option<Algorithm>) -> Self {
        let complexity = complexity_of(algorithm);
        Self {
            algorithm,
            language,
            time_complexity: complexity.time.to_string(),
            space_complexity: complexity.space.to_string(),
            note: note_of(language).to_string(),
        }
    }
}

/// Rule-based snippet classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify with auto-detection of the algorithm. Any asserted algorithm
    /// on the request is ignored.
    pub fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResult, ClassificationError> {
        let code = require_code(request)?;
        let language = self.detect_language(code)?;
        let algorithm = algorithm::detect_algorithm(code);

        tracing::debug!(
            language = %language,
            algorithm = crate::label::algorithm_label(algorithm),
            "Classified snippet"
        );

        Ok(ClassificationResult::assemble(language, algorithm))
    }

    /// Classify using the caller-asserted algorithm when one is given.
    ///
    /// A non-empty `algorithm` must name a complexity-table entry and replaces
    /// detection; an absent or empty one falls back to detection.
    pub fn classify_asserted(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResult, ClassificationError> {
        let code = require_code(request)?;

        let asserted = match request.algorithm.as_deref() {
            Some(name) if !name.is_empty() => Some(
                lookup_algorithm(name)
                    .ok_or_else(|| ClassificationError::InvalidAlgorithm(name.to_string()))?,
            ),
            _ => None,
        };

        let language = self.detect_language(code)?;
        let algorithm = asserted.or_else(|| algorithm::detect_algorithm(code));

        tracing::debug!(
            language = %language,
            algorithm = crate::label::algorithm_label(algorithm),
            asserted = asserted.is_some(),
            "Classified snippet"
        );

        Ok(ClassificationResult::assemble(language, algorithm))
    }

    fn detect_language(&self, code: &str) -> Result<Language, ClassificationError> {
        language::detect_language_with(self.config.profile, code)
            .ok_or(ClassificationError::UnsupportedLanguage)
    }
}

fn require_code(request: &ClassificationRequest) -> Result<&str, ClassificationError> {
    match request.code.as_deref() {
        Some(code) if !code.is_empty() => Ok(code),
        _ => Err(ClassificationError::MissingCode),
    }
}

/// Classify `code` with the default configuration
pub fn classify(code: &str) -> Result<ClassificationResult, ClassificationError> {
    Classifier::default().classify(&ClassificationRequest::new(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_code() {
        let classifier = Classifier::default();
        let request = ClassificationRequest::default();
        assert_eq!(classifier.classify(&request), Err(ClassificationError::MissingCode));
        assert_eq!(classify(""), Err(ClassificationError::MissingCode));
    }

    #[test]
    fn test_missing_code_checked_before_algorithm() {
        let request = ClassificationRequest {
            code: Some(String::new()),
            algorithm: Some("Bogo Sort".to_string()),
        };
        assert_eq!(
            Classifier::default().classify_asserted(&request),
            Err(ClassificationError::MissingCode)
        );
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        // only truly empty code is rejected as missing
        assert_eq!(classify("   "), Err(ClassificationError::UnsupportedLanguage));
    }

    #[test]
    fn test_result_assembly() {
        let result = classify("#include <iostream>\nint binarySearch() {}").unwrap();
        assert_eq!(result.language, Language::Cpp);
        assert_eq!(result.algorithm, Some(Algorithm::BinarySearch));
        assert_eq!(result.time_complexity, "O(log n)");
        assert_eq!(result.space_complexity, "O(1)");
        assert_eq!(result.note, "C++ is optimized with STL for common algorithms.");
    }

    #[test]
    fn test_auto_mode_ignores_asserted_algorithm() {
        let request = ClassificationRequest::new("def foo(): pass").with_algorithm("Quick Sort");
        let result = Classifier::default().classify(&request).unwrap();
        assert_eq!(result.algorithm, None);
    }

    #[test]
    fn test_asserted_invalid_algorithm() {
        let request = ClassificationRequest::new("def foo(): pass").with_algorithm("Heap Sort");
        assert_eq!(
            Classifier::default().classify_asserted(&request),
            Err(ClassificationError::InvalidAlgorithm("Heap Sort".to_string()))
        );
    }

    #[test]
    fn test_asserted_empty_algorithm_falls_back_to_detection() {
        let request = ClassificationRequest::new("def merge(a, b): pass").with_algorithm("");
        let result = Classifier::default().classify_asserted(&request).unwrap();
        assert_eq!(result.algorithm, Some(Algorithm::MergeSort));
    }

    #[test]
    fn test_legacy_profile() {
        let classifier = Classifier::new(ClassifierConfig::new().with_profile(RuleProfile::Legacy));
        let request = ClassificationRequest::new("function f() {}");
        assert_eq!(
            classifier.classify(&request),
            Err(ClassificationError::UnsupportedLanguage)
        );
    }

    #[test]
    fn test_result_wire_shape() {
        let result = classify("def foo(): pass").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "algorithm": null,
                "language": "Python",
                "timeComplexity": "Unknown",
                "spaceComplexity": "Unknown",
                "note": "Python relies on Timsort for sorting and has high-level simplicity."
            })
        );
    }

    #[test]
    fn test_request_decodes_with_missing_fields() {
        let request: ClassificationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, ClassificationRequest::default());
        let request: ClassificationRequest =
            serde_json::from_str(r#"{"code": "x", "algorithm": null}"#).unwrap();
        assert_eq!(request.code.as_deref(), Some("x"));
    }
}
