// JSON Pointer Helpers
// Splits pointer paths where the object part ends and array indexing begins

use memchr::memchr_iter;

/// Split a path at the first `/` that is followed by an ASCII digit.
///
/// JSON-pointer predicates address object members by name and array
/// elements by number; the first `/<digit>` marks where indexing starts.
/// Returns `(before, rest)` with `rest` beginning at the slash, or
/// `(s, b"")` when no such position exists. Only ASCII `0`-`9` count as
/// digits; digits from other scripts do not split. The result borrows from
/// the input, so nothing is allocated.
pub fn split_at_first_slash_digit(s: &[u8]) -> (&[u8], &[u8]) {
    for i in memchr_iter(b'/', s) {
        if s.get(i + 1).is_some_and(|b| b.is_ascii_digit()) {
            return s.split_at(i);
        }
    }
    (s, &[])
}
