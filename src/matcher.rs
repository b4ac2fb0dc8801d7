// LIKE Segment Matcher
// Compiles LIKE patterns into literal segments and evaluates them per row

use memchr::memmem;

use crate::types::{Operand, PatternError};

/// One run of a LIKE pattern between two unescaped `%` wildcards.
///
/// A segment is a fixed-length template: `total_len` bytes of input, where
/// the positions listed in `underscores` accept any byte and the remaining
/// positions must equal `literal` in order. Runs of consecutive `%` produce
/// empty segments, which evaluation skips.
#[derive(Debug, Clone)]
struct Segment {
    /// Literal bytes of the segment, with `_` positions removed.
    literal: Vec<u8>,

    /// Ascending positions of `_` within the segment's matched span.
    underscores: Vec<usize>,

    /// Length of the span this segment consumes (literal bytes + `_`s).
    total_len: usize,
}

impl Segment {
    fn new() -> Self {
        Segment {
            literal: Vec::new(),
            underscores: Vec::new(),
            total_len: 0,
        }
    }

    /// Check whether the segment matches `input` at offset `at`.
    ///
    /// Walks the template positions, skipping underscore positions and
    /// comparing the rest against the literal bytes.
    fn matches_at(&self, input: &[u8], at: usize) -> bool {
        if at + self.total_len > input.len() {
            return false;
        }

        let mut literal_idx = 0;
        let mut underscores = self.underscores.iter().copied().peekable();
        for i in 0..self.total_len {
            if underscores.peek() == Some(&i) {
                underscores.next();
                continue;
            }
            if input[at + i] != self.literal[literal_idx] {
                return false;
            }
            literal_idx += 1;
        }
        true
    }

    /// Find the lowest offset `>= start` where the segment matches.
    ///
    /// Segments without underscores are a plain substring search and go
    /// through `memmem`; segments with underscores scan candidate offsets.
    fn find_from(&self, input: &[u8], start: usize) -> Option<usize> {
        let haystack = input.get(start..)?;

        if self.underscores.is_empty() {
            return memmem::find(haystack, &self.literal).map(|at| start + at);
        }

        let last = input.len().checked_sub(self.total_len)?;
        (start..=last).find(|&at| self.matches_at(input, at))
    }
}

/// A compiled LIKE pattern, evaluated by locating literal segments.
///
/// For the common predicate shapes (`abc%`, `%abc`, `%abc%`, `a%b_c%d`)
/// segment location is substring search plus position checks, which beats a
/// regex engine by a wide margin per row. The matcher is immutable after
/// construction and freely shareable across scan threads; inputs are
/// borrowed byte slices and evaluation allocates nothing.
///
/// Matching is byte-exact: `_` consumes exactly one byte, so a multi-byte
/// UTF-8 character is consumed by as many `_` as its encoded length, and
/// invalid UTF-8 input is matched like any other byte sequence.
///
/// # Examples
/// ```
/// # use like_matcher::LikeMatcher;
/// let matcher = LikeMatcher::new(b"file\\_name%").unwrap();
/// assert!(matcher.matches(b"file_name.txt"));
/// assert!(!matcher.matches(b"fileXname.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct LikeMatcher {
    /// Segments in pattern order, conceptually separated by `%`.
    segments: Vec<Segment>,

    /// True iff the pattern begins with an unescaped `%`.
    leading_wildcard: bool,

    /// True iff the pattern ends with an unescaped `%`.
    trailing_wildcard: bool,

    /// Smallest input length any match can have, for early rejection.
    min_len: usize,
}

impl LikeMatcher {
    /// Compile a LIKE pattern.
    ///
    /// The pattern is partitioned on unescaped `%`; each partition becomes
    /// one segment, with `_` recorded as an any-byte position and escaped
    /// bytes decoded to literals.
    ///
    /// # Errors
    /// A trailing lone `\` is rejected with [`PatternError::InvalidPattern`].
    pub fn new(pattern: &[u8]) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        let mut current = Segment::new();
        let mut escaped = false;
        let mut leading_wildcard = false;
        let mut trailing_wildcard = false;
        let mut first = true;

        for &b in pattern {
            if escaped {
                current.literal.push(b);
                current.total_len += 1;
                escaped = false;
                trailing_wildcard = false;
            } else {
                match b {
                    b'\\' => {
                        escaped = true;
                        trailing_wildcard = false;
                    }
                    b'%' => {
                        segments.push(std::mem::replace(&mut current, Segment::new()));
                        if first {
                            leading_wildcard = true;
                        }
                        trailing_wildcard = true;
                    }
                    b'_' => {
                        current.underscores.push(current.total_len);
                        current.total_len += 1;
                        trailing_wildcard = false;
                    }
                    _ => {
                        current.literal.push(b);
                        current.total_len += 1;
                        trailing_wildcard = false;
                    }
                }
            }
            first = false;
        }

        if escaped {
            return Err(PatternError::InvalidPattern);
        }
        segments.push(current);

        let min_len = min_input_len(&segments, leading_wildcard, trailing_wildcard);

        Ok(LikeMatcher {
            segments,
            leading_wildcard,
            trailing_wildcard,
            min_len,
        })
    }

    /// The smallest input length this pattern can match.
    ///
    /// A true lower bound: `matches` returns `false` for every input
    /// shorter than this.
    pub fn min_required_length(&self) -> usize {
        self.min_len
    }

    /// Evaluate the pattern against one input.
    ///
    /// Returns `true` iff the whole input is consumed by the pattern; there
    /// is no implicit surrounding `%`.
    pub fn matches(&self, input: &[u8]) -> bool {
        let n = input.len();

        if n < self.min_len {
            return false;
        }

        // One segment and no wildcards is an exact byte/underscore template.
        if self.segments.len() == 1 && !self.leading_wildcard && !self.trailing_wildcard {
            let seg = &self.segments[0];
            return n == seg.total_len && (seg.total_len == 0 || seg.matches_at(input, 0));
        }

        let last = self.segments.len() - 1;
        let mut pos = 0;

        for (i, seg) in self.segments.iter().enumerate() {
            if seg.total_len == 0 {
                continue;
            }

            if i == 0 && !self.leading_wildcard {
                // Anchored at the start of the input.
                if !seg.matches_at(input, 0) {
                    return false;
                }
                pos = seg.total_len;
            } else if i == last && !self.trailing_wildcard {
                // Anchored at the end of the input.
                let end_pos = n - seg.total_len;
                if end_pos < pos || !seg.matches_at(input, end_pos) {
                    return false;
                }
            } else {
                // Flanked by `%` on both sides: locate anywhere at or after
                // the cursor. Advance by one, not by the segment length: the
                // separating `%` may match zero bytes, so the next segment
                // is allowed to overlap this one (`%aa%aa%` matches `aaa`).
                match seg.find_from(input, pos) {
                    Some(found) => pos = found + 1,
                    None => return false,
                }
            }
        }

        true
    }

    /// Type-erased evaluation over a heterogeneously-typed operand.
    ///
    /// Non-string operands evaluate to `false` without raising, so the
    /// matcher can sit in a generic predicate slot.
    pub fn matches_operand(&self, operand: Operand<'_>) -> bool {
        match operand.as_bytes() {
            Some(input) => self.matches(input),
            None => false,
        }
    }
}

/// Compute the smallest input length a segment chain can match.
///
/// Mirrors the evaluation walk with every segment located at its earliest
/// legal offset. Summing segment lengths would overshoot: `%`-flanked
/// segments may overlap, so `%aa%aa%` already matches a 3-byte input.
fn min_input_len(segments: &[Segment], leading_wildcard: bool, trailing_wildcard: bool) -> usize {
    let last = segments.len() - 1;
    let mut pos = 0;
    let mut need = 0;

    for (i, seg) in segments.iter().enumerate() {
        if seg.total_len == 0 {
            continue;
        }
        if i == 0 && !leading_wildcard {
            pos = seg.total_len;
            need = seg.total_len;
        } else if i == last && !trailing_wildcard {
            need = need.max(pos + seg.total_len);
        } else {
            need = need.max(pos + seg.total_len);
            pos += 1;
        }
    }

    need
}
