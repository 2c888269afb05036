//! Language detection
//!
//! Ordered signature rules; the earliest matching rule decides. Several rules
//! share triggers (`int main()` appears in the C++ and C rules, `def ` in the
//! Python and Ruby rules), so C++ wins over C and Python wins over Ruby.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::label::Language;
use crate::rule::{first_match, Signature, SignatureRule};

use Signature::{AnyOf, Contains};

/// Which JavaScript signature the rule list uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleProfile {
    /// JavaScript is `document.getElementById` or `function`
    #[default]
    Standard,
    /// JavaScript is `document.getElementById` or `int main()`
    Legacy,
}

impl RuleProfile {
    /// Language rules for this profile, in evaluation order
    pub fn language_rules(&self) -> &'static [SignatureRule<Language>] {
        match self {
            RuleProfile::Standard => STANDARD_RULES,
            RuleProfile::Legacy => LEGACY_RULES,
        }
    }
}

impl FromStr for RuleProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RuleProfile::Standard),
            "legacy" => Ok(RuleProfile::Legacy),
            other => Err(format!("unknown rule profile '{}'", other)),
        }
    }
}

const CPP: SignatureRule<Language> = SignatureRule::new(
    "cpp",
    Language::Cpp,
    AnyOf(&[Contains("<iostream>"), Contains("int main()")]),
);

const JAVA: SignatureRule<Language> = SignatureRule::new(
    "java",
    Language::Java,
    Contains("public static void main"),
);

const PYTHON: SignatureRule<Language> = SignatureRule::new(
    "python",
    Language::Python,
    AnyOf(&[Contains("def "), Contains("import ")]),
);

const RUBY: SignatureRule<Language> = SignatureRule::new(
    "ruby",
    Language::Ruby,
    AnyOf(&[Contains("def "), Contains("puts")]),
);

const C: SignatureRule<Language> = SignatureRule::new(
    "c",
    Language::C,
    AnyOf(&[Contains("<stdio.h>"), Contains("int main()")]),
);

static STANDARD_RULES: &[SignatureRule<Language>] = &[
    CPP,
    JAVA,
    PYTHON,
    RUBY,
    SignatureRule::new(
        "javascript",
        Language::JavaScript,
        AnyOf(&[Contains("document.getElementById"), Contains("function")]),
    ),
    C,
];

static LEGACY_RULES: &[SignatureRule<Language>] = &[
    CPP,
    JAVA,
    PYTHON,
    RUBY,
    SignatureRule::new(
        "javascript_legacy",
        Language::JavaScript,
        AnyOf(&[Contains("document.getElementById"), Contains("int main()")]),
    ),
    C,
];

/// Detect the language with the standard rule list
pub fn detect_language(code: &str) -> Option<Language> {
    detect_language_with(RuleProfile::Standard, code)
}

/// Detect the language with the given rule profile
pub fn detect_language_with(profile: RuleProfile, code: &str) -> Option<Language> {
    matching_rule(profile, code).map(|rule| rule.label)
}

/// The rule that decided the language, if any
pub fn matching_rule(
    profile: RuleProfile,
    code: &str,
) -> Option<&'static SignatureRule<Language>> {
    first_match(profile.language_rules(), code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_fixed() {
        let order: Vec<Language> = STANDARD_RULES.iter().map(|r| r.label).collect();
        assert_eq!(order, Language::ALL.to_vec());
        let order: Vec<Language> = LEGACY_RULES.iter().map(|r| r.label).collect();
        assert_eq!(order, Language::ALL.to_vec());
    }

    #[test]
    fn test_each_language_signature() {
        assert_eq!(detect_language("#include <iostream>"), Some(Language::Cpp));
        assert_eq!(
            detect_language("public static void main(String[] args) {}"),
            Some(Language::Java)
        );
        assert_eq!(detect_language("import os"), Some(Language::Python));
        assert_eq!(detect_language("puts 'hello'"), Some(Language::Ruby));
        assert_eq!(
            detect_language("document.getElementById('x')"),
            Some(Language::JavaScript)
        );
        assert_eq!(detect_language("function add(a, b) {}"), Some(Language::JavaScript));
        assert_eq!(detect_language("#include <stdio.h>"), Some(Language::C));
    }

    #[test]
    fn test_shared_triggers_resolve_to_earliest_rule() {
        // `int main()` is both C++ and C
        assert_eq!(
            detect_language("#include <stdio.h>\nint main() { return 0; }"),
            Some(Language::Cpp)
        );
        // `def ` is both Python and Ruby
        assert_eq!(detect_language("def greet\n  puts 'hi'\nend"), Some(Language::Python));
        // Java's main also loses to C++ markers
        assert_eq!(
            detect_language("<iostream> public static void main"),
            Some(Language::Cpp)
        );
    }

    #[test]
    fn test_no_signature() {
        assert_eq!(detect_language("print('hi')"), None);
        assert_eq!(detect_language("fn main() {}"), None);
        // case sensitive
        assert_eq!(detect_language("FUNCTION X"), None);
    }

    #[test]
    fn test_legacy_profile_javascript() {
        let code = "function add(a, b) { return a + b; }";
        assert_eq!(detect_language_with(RuleProfile::Legacy, code), None);
        assert_eq!(
            detect_language_with(RuleProfile::Legacy, "document.getElementById('out')"),
            Some(Language::JavaScript)
        );
        // `int main()` is still claimed by C++ first
        assert_eq!(
            detect_language_with(RuleProfile::Legacy, "int main() {}"),
            Some(Language::Cpp)
        );
    }

    #[test]
    fn test_matching_rule_reports_name() {
        let rule = matching_rule(RuleProfile::Standard, "puts 1").unwrap();
        assert_eq!(rule.name, "ruby");
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("Legacy".parse::<RuleProfile>(), Ok(RuleProfile::Legacy));
        assert_eq!(" standard ".parse::<RuleProfile>(), Ok(RuleProfile::Standard));
        assert!("strict".parse::<RuleProfile>().is_err());
    }
}
