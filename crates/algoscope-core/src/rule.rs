//! Signature rules
//!
//! A rule pairs a label with a [`Signature`], a small predicate tree over the
//! raw code text. Rule lists are evaluated in order and the first rule whose
//! signature matches decides the label.

/// Predicate over code text built from substring containment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// Code contains the literal
    Contains(&'static str),
    /// At least one nested signature matches
    AnyOf(&'static [Signature]),
    /// Every nested signature matches
    AllOf(&'static [Signature]),
}

impl Signature {
    /// Evaluate against a code snippet
    pub fn matches(&self, code: &str) -> bool {
        match self {
            Signature::Contains(needle) => code.contains(needle),
            Signature::AnyOf(parts) => parts.iter().any(|s| s.matches(code)),
            Signature::AllOf(parts) => parts.iter().all(|s| s.matches(code)),
        }
    }
}

/// A labelled, named signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRule<L: 'static> {
    /// Short identifier, reported when the rule fires
    pub name: &'static str,
    pub label: L,
    pub signature: Signature,
}

impl<L: Copy> SignatureRule<L> {
    pub const fn new(name: &'static str, label: L, signature: Signature) -> Self {
        Self {
            name,
            label,
            signature,
        }
    }
}

/// First rule in `rules` that matches `code`
pub fn first_match<'a, L: Copy>(
    rules: &'a [SignatureRule<L>],
    code: &str,
) -> Option<&'a SignatureRule<L>> {
    rules.iter().find(|rule| rule.signature.matches(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    static RULES: &[SignatureRule<u8>] = &[
        SignatureRule::new(
            "first",
            1,
            Signature::AllOf(&[Signature::Contains("a"), Signature::Contains("b")]),
        ),
        SignatureRule::new(
            "second",
            2,
            Signature::AnyOf(&[Signature::Contains("a"), Signature::Contains("c")]),
        ),
    ];

    #[test]
    fn test_contains() {
        assert!(Signature::Contains("mid").matches("int mid = 0;"));
        assert!(!Signature::Contains("mid").matches("int low = 0;"));
        assert!(!Signature::Contains("def ").matches("undefined"));
    }

    #[test]
    fn test_empty_combinators() {
        assert!(Signature::AllOf(&[]).matches("anything"));
        assert!(!Signature::AnyOf(&[]).matches("anything"));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(first_match(RULES, "ab").map(|r| r.label), Some(1));
        assert_eq!(first_match(RULES, "a").map(|r| r.name), Some("second"));
        assert_eq!(first_match(RULES, "c").map(|r| r.label), Some(2));
        assert!(first_match(RULES, "xyz").is_none());
    }
}
