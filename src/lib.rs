//! # like-matcher: SQL LIKE predicate evaluation
//!
//! A byte-exact `LIKE` pattern matcher for evaluating
//! `column LIKE 'pattern'` predicates over string columns at scan speed.
//!
//! ## Pattern Syntax
//!
//! - `%` matches any run of bytes, including the empty run
//! - `_` matches exactly one byte
//! - `\` escapes the next byte, so `\%`, `\_` and `\\` are literals
//! - every other byte matches itself
//!
//! A match always covers the whole input; there is no implicit surrounding
//! `%`. A trailing lone `\` is a compile error.
//!
//! ## Components
//!
//! - [`LikeMatcher`] compiles a pattern into literal segments and evaluates
//!   rows without touching a regex engine
//! - [`SmartMatcher`] is the dispatching entry point predicate slots bind to
//! - [`translate_pattern_to_regex`] produces the reference regex that
//!   defines the matcher's semantics
//! - [`RegexMatcher`] runs that regex with full-match, byte-level settings
//! - [`extract_fixed_prefix`] yields the literal prefix a pattern implies,
//!   used to seed index range scans
//! - [`split_at_first_slash_digit`] splits JSON-pointer paths at the first
//!   array index
//!
//! ## Example Usage
//!
//! ```
//! use like_matcher::{extract_fixed_prefix, LikeMatcher};
//!
//! let matcher = LikeMatcher::new(b"wal\\_%.log")?;
//! assert!(matcher.matches(b"wal_0042.log"));
//! assert!(!matcher.matches(b"walX0042.log"));
//!
//! // Seed an index range scan with the pattern's fixed prefix.
//! assert_eq!(extract_fixed_prefix(b"wal\\_%.log")?, b"wal_");
//! # Ok::<(), like_matcher::PatternError>(())
//! ```
//!
//! ## Semantics
//!
//! Matching is defined over raw bytes. `_` consumes one byte, never one
//! codepoint, so three `_` consume one CJK character and invalid UTF-8 input
//! is matched like any other byte sequence. Adjacent `%`-flanked segments
//! may overlap in the input, so `%aa%aa%` matches `aaa`. Compiled matchers
//! are immutable, shareable across threads, and evaluation never allocates.

pub mod json_path;
pub mod matcher;
pub mod pattern;
pub mod regex_matcher;
pub mod smart;
pub mod types;

// Re-export the main types and functions for convenience
pub use json_path::split_at_first_slash_digit;
pub use matcher::LikeMatcher;
pub use pattern::{
    extract_fixed_prefix, is_special_byte, translate_operand_to_regex, translate_pattern_to_regex,
};
pub use regex_matcher::RegexMatcher;
pub use smart::SmartMatcher;
pub use types::{Operand, PatternError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
