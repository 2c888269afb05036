//! Classification errors

use thiserror::Error;

/// Why a snippet could not be classified
///
/// An unrecognised algorithm is not an error; it yields a result with no
/// algorithm and unknown complexities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("Code is required for analysis.")]
    MissingCode,

    #[error("Invalid algorithm selected: {0}")]
    InvalidAlgorithm(String),

    #[error("Unsupported or invalid code.")]
    UnsupportedLanguage,
}

impl ClassificationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ClassificationError::MissingCode => "MISSING_CODE",
            ClassificationError::InvalidAlgorithm(_) => "INVALID_ALGORITHM",
            ClassificationError::UnsupportedLanguage => "UNSUPPORTED_LANGUAGE",
        }
    }
}
