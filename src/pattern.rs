// LIKE Pattern Translation
// Compiles LIKE patterns into reference regexes and index-seed prefixes

use crate::types::{Operand, PatternError};

/// Check whether a byte is a regex metacharacter.
///
/// A literal occurrence of one of these in a LIKE pattern must be escaped
/// when the pattern is translated, so that the reference regex matches it
/// literally.
#[inline]
pub fn is_special_byte(b: u8) -> bool {
    matches!(
        b,
        b'\\'
            | b'.'
            | b'+'
            | b'*'
            | b'?'
            | b'('
            | b')'
            | b'|'
            | b'['
            | b']'
            | b'{'
            | b'}'
            | b'^'
            | b'$'
    )
}

/// Append one literal byte to a regex, escaping it if it is a metacharacter.
#[inline]
fn push_literal(out: &mut Vec<u8>, b: u8) {
    if is_special_byte(b) {
        out.push(b'\\');
    }
    out.push(b);
}

/// Translate a LIKE pattern into an equivalent regex pattern.
///
/// The output defines the reference semantics for every matcher in this
/// crate: whatever the translated regex accepts under full-input matching is
/// what `LIKE` accepts.
///
/// # Conversion Rules
/// - `%` becomes `[\s\S]*` (any run of bytes, newline included)
/// - `_` becomes `[\s\S]` (exactly one byte)
/// - `\x` becomes literal `x`, regex-escaped if `x` is a metacharacter
/// - any other byte is copied, regex-escaped if it is a metacharacter
///
/// The output carries no anchors; [`RegexMatcher`](crate::RegexMatcher)
/// applies full-input anchoring when it compiles the result.
///
/// # Errors
/// A trailing lone `\` (an escape with nothing to escape) is rejected with
/// [`PatternError::InvalidPattern`].
///
/// # Examples
/// ```
/// # use like_matcher::pattern::translate_pattern_to_regex;
/// assert_eq!(translate_pattern_to_regex(b"abc%").unwrap(), b"abc[\\s\\S]*");
/// assert_eq!(translate_pattern_to_regex(b"a_c").unwrap(), b"a[\\s\\S]c");
/// assert_eq!(translate_pattern_to_regex(b"a\\%b").unwrap(), b"a%b");
/// ```
pub fn translate_pattern_to_regex(pattern: &[u8]) -> Result<Vec<u8>, PatternError> {
    let mut out = Vec::with_capacity(pattern.len() + 8);
    let mut bytes = pattern.iter();

    while let Some(&b) = bytes.next() {
        match b {
            b'\\' => match bytes.next() {
                Some(&escaped) => push_literal(&mut out, escaped),
                None => return Err(PatternError::InvalidPattern),
            },
            b'%' => out.extend_from_slice(br"[\s\S]*"),
            b'_' => out.extend_from_slice(br"[\s\S]"),
            _ => push_literal(&mut out, b),
        }
    }

    Ok(out)
}

/// Type-erased front of [`translate_pattern_to_regex`].
///
/// Predicate compilation sites do not always know the operand type
/// statically; translating anything but a string operand fails with
/// [`PatternError::UnsupportedOperand`].
pub fn translate_operand_to_regex(operand: Operand<'_>) -> Result<Vec<u8>, PatternError> {
    match operand.as_bytes() {
        Some(pattern) => translate_pattern_to_regex(pattern),
        None => Err(PatternError::UnsupportedOperand(operand.type_name())),
    }
}

/// Extract the longest literal byte prefix implied by a LIKE pattern.
///
/// Every input matched by the pattern starts with the returned bytes, which
/// makes the result usable as the seed of an index range scan. The walk
/// resolves escapes and stops at the first unescaped `%` or `_`; it never
/// continues past a wildcard, so the planner can rely on "stops at the first
/// unescaped wildcard" exactly. A pattern without unescaped wildcards
/// decodes in full.
///
/// # Errors
/// A trailing lone `\` reachable by the walk is rejected with
/// [`PatternError::InvalidPattern`]. A wildcard before the end of the
/// pattern ends the walk early, so `"abc%\\"` yields `"abc"` without error.
///
/// # Examples
/// ```
/// # use like_matcher::pattern::extract_fixed_prefix;
/// assert_eq!(extract_fixed_prefix(b"abc%def").unwrap(), b"abc");
/// assert_eq!(extract_fixed_prefix(b"a_c").unwrap(), b"a");
/// assert_eq!(extract_fixed_prefix(b"%abc").unwrap(), b"");
/// assert_eq!(extract_fixed_prefix(b"100\\%").unwrap(), b"100%");
/// ```
pub fn extract_fixed_prefix(pattern: &[u8]) -> Result<Vec<u8>, PatternError> {
    let mut prefix = Vec::new();
    let mut bytes = pattern.iter();

    while let Some(&b) = bytes.next() {
        match b {
            b'%' | b'_' => return Ok(prefix),
            b'\\' => match bytes.next() {
                Some(&escaped) => prefix.push(escaped),
                None => return Err(PatternError::InvalidPattern),
            },
            _ => prefix.push(b),
        }
    }

    Ok(prefix)
}
