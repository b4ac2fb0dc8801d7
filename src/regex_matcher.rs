// Reference Regex Matcher
// Byte-level regex backend that defines the semantics the fast matcher obeys

use std::fmt::Write as _;

use regex::bytes::{Regex, RegexBuilder};

use crate::types::Operand;

/// Reference matcher over a translated LIKE regex.
///
/// Wraps a [`regex::bytes::Regex`] configured so that the translated
/// `[\s\S]` classes behave byte-exactly:
///
/// - full-input match (the pattern is wrapped in `\A(?:…)\z`)
/// - dot-matches-newline, so wildcards cross line boundaries
/// - Unicode mode off, so classes are byte classes and inputs may be
///   invalid UTF-8
///
/// The linear-time engine makes this safe against adversarial patterns like
/// `%a%a%a%a%b` scanned over long `aaaa…` inputs. Production row scans use
/// [`SmartMatcher`](crate::SmartMatcher); this type is the oracle the fast
/// path is tested against, and the planner fallback.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile a translated regex, given as raw bytes.
    ///
    /// Bytes outside ASCII are re-encoded as `\x{HH}` escapes so the
    /// compiled byte regex stays byte-exact for non-ASCII and even
    /// invalid-UTF-8 pattern bytes.
    pub fn new(pattern: &[u8]) -> Result<Self, regex::Error> {
        let mut source = String::with_capacity(pattern.len() + 8);
        source.push_str(r"\A(?:");
        for &b in pattern {
            if b.is_ascii() {
                source.push(b as char);
            } else {
                // Infallible for String.
                let _ = write!(source, r"\x{{{b:02X}}}");
            }
        }
        source.push_str(r")\z");

        let regex = RegexBuilder::new(&source)
            .unicode(false)
            .dot_matches_new_line(true)
            .build()?;

        Ok(RegexMatcher { regex })
    }

    /// Evaluate the regex against one input, requiring a full match.
    pub fn matches(&self, input: &[u8]) -> bool {
        self.regex.is_match(input)
    }

    /// Type-erased evaluation; non-string operands are `false`.
    pub fn matches_operand(&self, operand: Operand<'_>) -> bool {
        match operand.as_bytes() {
            Some(input) => self.matches(input),
            None => false,
        }
    }
}
