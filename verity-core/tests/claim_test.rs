use proptest::prelude::*;
use verity_core::claim::{normalize, Claim};

#[test]
fn normalize_collapses_whitespace_and_lowercases() {
    assert_eq!(
        normalize("  The   Great\tWall \n is visible  "),
        "the great wall is visible"
    );
}

#[test]
fn normalize_of_empty_and_blank_is_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \t\n  "), "");
}

#[test]
fn claim_keeps_trimmed_raw_and_normalized_forms() {
    let claim = Claim::new("  The Eiffel Tower is in PARIS  ");
    assert_eq!(claim.raw(), "The Eiffel Tower is in PARIS");
    assert_eq!(claim.normalized(), "the eiffel tower is in paris");
    assert!(!claim.is_empty());
}

#[test]
fn blank_claim_is_empty() {
    assert!(Claim::new("   ").is_empty());
    assert!(Claim::new("").is_empty());
}

#[test]
fn claims_differing_only_in_case_and_spacing_share_identity() {
    let a = Claim::new("Water  Boils at 100C");
    let b = Claim::new("water boils at 100c");
    assert_eq!(a.normalized(), b.normalized());
    assert_ne!(a.raw(), b.raw());
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,200}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn normalized_has_no_double_spaces_or_uppercase(s in "\\PC{0,200}") {
        let n = normalize(&s);
        prop_assert!(!n.contains("  "));
        prop_assert!(!n.starts_with(' '));
        prop_assert!(!n.ends_with(' '));
        prop_assert_eq!(n.to_lowercase(), n.clone());
    }
}
