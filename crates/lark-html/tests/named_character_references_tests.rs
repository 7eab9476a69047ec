//! Integration tests for named character reference lookup.

use lark_html::tokenizer::named_character_references::{
    is_legacy_entity, longest_legacy_prefix, lookup_entity,
};

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("lt"), Some("<"));
    assert_eq!(lookup_entity("gt"), Some(">"));
    assert_eq!(lookup_entity("quot"), Some("\""));
    assert_eq!(lookup_entity("nbsp"), Some("\u{00A0}"));
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(lookup_entity("AMP"), Some("&"));
    assert_eq!(lookup_entity("Amp"), None);
    assert_eq!(lookup_entity("Alpha"), Some("\u{0391}"));
    assert_eq!(lookup_entity("alpha"), Some("\u{03B1}"));
}

#[test]
fn test_lookup_two_code_point_entities() {
    assert_eq!(lookup_entity("fjlig"), Some("fj"));
    assert_eq!(lookup_entity("nvlt"), Some("<\u{20D2}"));
    assert_eq!(lookup_entity("ThickSpace"), Some("\u{205F}\u{200A}"));
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity"), None);
    assert_eq!(lookup_entity("amp;"), None); // names are stored without ';'
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_legacy_entities() {
    assert!(is_legacy_entity("amp"));
    assert!(is_legacy_entity("copy"));
    assert!(is_legacy_entity("not"));
    assert!(is_legacy_entity("yuml"));
    assert!(!is_legacy_entity("notin"));
    assert!(!is_legacy_entity("hearts"));
    assert!(!is_legacy_entity("apos"));
}

#[test]
fn test_longest_legacy_prefix() {
    assert_eq!(longest_legacy_prefix("notit"), Some(("not", "\u{00AC}")));
    assert_eq!(longest_legacy_prefix("ampx"), Some(("amp", "&")));
    assert_eq!(longest_legacy_prefix("copy"), Some(("copy", "\u{00A9}")));
    // "notin" is an entity, but only with its semicolon.
    assert_eq!(longest_legacy_prefix("notin"), Some(("not", "\u{00AC}")));
    assert_eq!(longest_legacy_prefix("xyz"), None);
    assert_eq!(longest_legacy_prefix(""), None);
}

#[test]
fn test_longest_legacy_prefix_of_long_names() {
    let frac = format!("frac12{}", "x".repeat(100_000));
    assert_eq!(longest_legacy_prefix(&frac), Some(("frac12", "\u{00BD}")));
    assert_eq!(longest_legacy_prefix(&"a".repeat(100_000)), None);
}
