//! The pattern classifier: reduces a triple match pattern to one of eight
//! constant-time cases.

use super::triple::TriplePattern;

/// The eight SPO match patterns. `_` in the spec notation denotes a
/// wildcard (`Node::Any`); the variant names below spell that notation out
/// so it stays a valid Rust identifier, and each doc comment carries the
/// original notation for cross-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `SPO` - all three bound.
    Spo,
    /// `SP_` - subject and predicate bound.
    SpAny,
    /// `S_O` - subject and object bound.
    SAnyO,
    /// `S__` - only subject bound.
    SAnyAny,
    /// `_PO` - predicate and object bound.
    AnyPo,
    /// `_P_` - only predicate bound.
    AnyPAny,
    /// `__O` - only object bound.
    AnyAnyO,
    /// `___` - fully wildcard.
    AnyAnyAny,
}

/// Classifies a match pattern into one of the eight [`Pattern`] cases.
///
/// This is a constant-time 3-bit code; every query entry point in the
/// stores dispatches on it, so every backend implements all eight cases
/// explicitly rather than falling back to a generic scan.
#[must_use]
pub fn classify(pattern: &TriplePattern) -> Pattern {
    let s = !pattern.subject.is_any();
    let p = !pattern.predicate.is_any();
    let o = !pattern.object.is_any();

    match (s, p, o) {
        (true, true, true) => Pattern::Spo,
        (true, true, false) => Pattern::SpAny,
        (true, false, true) => Pattern::SAnyO,
        (true, false, false) => Pattern::SAnyAny,
        (false, true, true) => Pattern::AnyPo,
        (false, true, false) => Pattern::AnyPAny,
        (false, false, true) => Pattern::AnyAnyO,
        (false, false, false) => Pattern::AnyAnyAny,
    }
}
