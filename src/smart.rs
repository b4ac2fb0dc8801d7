// Smart Matcher
// Entry point that picks the evaluation engine for a LIKE predicate

use crate::matcher::LikeMatcher;
use crate::types::{Operand, PatternError};

/// Dispatching LIKE matcher used in predicate slots.
///
/// The full LIKE grammar (`%`, `_`, escapes) is expressible as literal
/// segments, so every pattern dispatches to the segment matcher and the
/// regex engine is never consulted per row. The type exists as the policy
/// seam: call sites bind to it rather than to a concrete engine.
#[derive(Debug, Clone)]
pub struct SmartMatcher {
    like: LikeMatcher,
}

impl SmartMatcher {
    /// Compile a LIKE pattern and select its evaluation engine.
    pub fn new(pattern: &[u8]) -> Result<Self, PatternError> {
        Ok(SmartMatcher {
            like: LikeMatcher::new(pattern)?,
        })
    }

    /// Evaluate the predicate against one input.
    pub fn matches(&self, input: &[u8]) -> bool {
        self.like.matches(input)
    }

    /// Type-erased evaluation; non-string operands are `false`.
    pub fn matches_operand(&self, operand: Operand<'_>) -> bool {
        self.like.matches_operand(operand)
    }
}
