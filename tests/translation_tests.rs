// Integration tests for the translator, reference matcher, and prefix seed

use like_matcher::{
    extract_fixed_prefix, translate_operand_to_regex, translate_pattern_to_regex, LikeMatcher,
    Operand, PatternError, RegexMatcher,
};

fn reference(pattern: &[u8]) -> RegexMatcher {
    RegexMatcher::new(&translate_pattern_to_regex(pattern).unwrap()).unwrap()
}

// ============ Translation Workflow ============

#[test]
fn test_translate_then_compile_workflow() {
    let regex = translate_pattern_to_regex(b"%a_b%").unwrap();
    assert_eq!(regex, b"[\\s\\S]*a[\\s\\S]b[\\s\\S]*");

    let m = RegexMatcher::new(&regex).unwrap();
    assert!(m.matches(b"XaYbZ"));
    assert!(m.matches(b"aXb"));
    assert!(!m.matches(b"ab"));
}

#[test]
fn test_translated_metacharacters_match_literally() {
    let m = reference(b"a.b");
    assert!(m.matches(b"a.b"));
    assert!(!m.matches(b"aXb"));

    let m = reference(b"[test]");
    assert!(m.matches(b"[test]"));
    assert!(!m.matches(b"t"));

    let m = reference(b"(test)");
    assert!(m.matches(b"(test)"));
    assert!(!m.matches(b"test"));

    let m = reference(b"func(%)%");
    assert!(m.matches(b"func()"));
    assert!(m.matches(b"func(a,b)"));
    assert!(!m.matches(b"func"));
}

#[test]
fn test_translated_percent_spans_newlines() {
    let m = reference(b"Hello%");
    assert!(m.matches(b"Hello\n"));
    assert!(m.matches(b"Hello\nWorld"));

    let m = reference(b"%");
    assert!(m.matches(b"line1\nline2\nline3"));
}

#[test]
fn test_translation_requires_full_match() {
    let m = reference(b"abc");
    assert!(m.matches(b"abc"));
    assert!(!m.matches(b"abcd"));
    assert!(!m.matches(b"zabc"));
}

#[test]
fn test_every_translation_error_surface_rejects_trailing_escape() {
    assert_eq!(
        translate_pattern_to_regex(b"abc\\").unwrap_err(),
        PatternError::InvalidPattern
    );
    assert_eq!(
        extract_fixed_prefix(b"abc\\").unwrap_err(),
        PatternError::InvalidPattern
    );
    assert_eq!(
        LikeMatcher::new(b"abc\\").unwrap_err(),
        PatternError::InvalidPattern
    );
}

// ============ Type-Erased Translation ============

#[test]
fn test_operand_translation_accepts_strings() {
    assert_eq!(
        translate_operand_to_regex(Operand::from("abc")).unwrap(),
        b"abc"
    );
    assert_eq!(
        translate_operand_to_regex(Operand::from(&b"xyz"[..])).unwrap(),
        b"xyz"
    );
}

#[test]
fn test_operand_translation_rejects_non_strings() {
    for (operand, type_name) in [
        (Operand::Int(123), "int"),
        (Operand::Float(3.14), "float"),
        (Operand::Bool(true), "bool"),
    ] {
        assert_eq!(
            translate_operand_to_regex(operand).unwrap_err(),
            PatternError::UnsupportedOperand(type_name)
        );
    }
}

// ============ Prefix Seeding ============

#[test]
fn test_prefix_contract_examples() {
    let cases: &[(&[u8], &[u8])] = &[
        (b"abc%", b"abc"),
        (b"a_c", b"a"),
        (b"%abc", b""),
        (b"100\\%", b"100%"),
        (b"a\\_b_c", b"a_b"),
        (b"", b""),
        (b"10\\%\\_off%", b"10%_off"),
    ];
    for &(pattern, expected) in cases {
        assert_eq!(
            extract_fixed_prefix(pattern).unwrap(),
            expected,
            "pattern {pattern:?}"
        );
    }
}

#[test]
fn test_prefix_is_prefix_of_every_matching_input() {
    // The planner seeds range scans with the prefix, so any input the
    // matcher accepts must start with it.
    let cases: &[(&[u8], &[&[u8]])] = &[
        (b"abc%", &[b"abc", b"abcdef", b"abc\n"]),
        (b"a\\_b%", &[b"a_b", b"a_bcd"]),
        (b"100\\%%", &[b"100%", b"100%off"]),
        (b"_tail", &[b"Xtail", b"ytail"]),
        (b"%free", &[b"carefree", b"free"]),
        (b"\\%lit%", &[b"%lit", b"%literal"]),
    ];
    for &(pattern, inputs) in cases {
        let prefix = extract_fixed_prefix(pattern).unwrap();
        let m = LikeMatcher::new(pattern).unwrap();
        for &input in inputs {
            assert!(m.matches(input), "pattern {pattern:?} input {input:?}");
            assert!(
                input.starts_with(&prefix),
                "pattern {pattern:?} prefix {prefix:?} input {input:?}"
            );
        }
    }
}

#[test]
fn test_prefix_of_escaped_leading_wildcards() {
    // A leading escaped wildcard is a literal and lands in the prefix.
    assert_eq!(extract_fixed_prefix(b"\\%100").unwrap(), b"%100");
    assert_eq!(extract_fixed_prefix(b"\\_abc%").unwrap(), b"_abc");
    // A leading unescaped one empties it.
    assert_eq!(extract_fixed_prefix(b"_100").unwrap(), b"");
}
