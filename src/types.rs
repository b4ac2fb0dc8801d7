// Core types shared by the LIKE pattern components

use thiserror::Error;

/// Errors surfaced while compiling a LIKE pattern.
///
/// Every error is reported at construction time; evaluation itself never
/// fails. A bad pattern is rejected before any row is scanned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern ends with a lone `\` that escapes nothing.
    #[error("invalid LIKE pattern: trailing escape with nothing to escape")]
    InvalidPattern,

    /// Pattern compilation was invoked on a non-string operand.
    #[error("pattern matching is only supported on string operands, got {0}")]
    UnsupportedOperand(&'static str),
}

/// A type-erased predicate operand.
///
/// Scanned columns are heterogeneously typed, and predicate slots hand the
/// matcher whatever value a row holds. Only `Bytes` operands can match a
/// LIKE pattern; every other variant evaluates to `false` without raising,
/// so a matcher can be plugged into a generic predicate slot unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// A string-typed value, viewed as raw bytes.
    Bytes(&'a [u8]),
    /// An integer-typed value.
    Int(i64),
    /// A float-typed value.
    Float(f64),
    /// A boolean-typed value.
    Bool(bool),
}

impl<'a> Operand<'a> {
    /// The operand's bytes, if it is string-typed.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Operand::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Operand type label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Bytes(_) => "bytes",
            Operand::Int(_) => "int",
            Operand::Float(_) => "float",
            Operand::Bool(_) => "bool",
        }
    }
}

impl<'a> From<&'a [u8]> for Operand<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Operand::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(s: &'a str) -> Self {
        Operand::Bytes(s.as_bytes())
    }
}

impl From<i64> for Operand<'_> {
    fn from(v: i64) -> Self {
        Operand::Int(v)
    }
}

impl From<f64> for Operand<'_> {
    fn from(v: f64) -> Self {
        Operand::Float(v)
    }
}

impl From<bool> for Operand<'_> {
    fn from(v: bool) -> Self {
        Operand::Bool(v)
    }
}
