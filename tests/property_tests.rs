//! Property-based tests for identifier validation and formation parsing.
//!
//! Tests validate:
//! 1. Validation accepts exactly the positive integers
//! 2. Sanitised field text only ever holds digits
//! 3. Formation parsing keeps service order and count

use proptest::prelude::*;
use skillforge::model::{is_valid_member_id, parse_formations, sanitize_digits, MemberId};

// ===== Property 1: Validation =====

proptest! {
    #[test]
    fn positive_integers_are_valid(n in 1u64..=u64::MAX) {
        prop_assert!(is_valid_member_id(&n.to_string()));
        prop_assert_eq!(MemberId::parse(&n.to_string()).map(MemberId::get), Ok(n));
    }

    #[test]
    fn digit_strings_are_valid_iff_positive(s in "[0-9]{1,18}") {
        let value: u64 = s.parse().unwrap();
        prop_assert_eq!(is_valid_member_id(&s), value > 0);
    }

    #[test]
    fn any_non_digit_makes_input_invalid(
        prefix in "[0-9]{0,5}",
        bad in "[^0-9]",
        suffix in "[0-9]{0,5}",
    ) {
        let raw = format!("{prefix}{bad}{suffix}");
        prop_assert!(!is_valid_member_id(&raw), "{:?} accepted", raw);
    }

    #[test]
    fn negative_and_decimal_numbers_are_invalid(n in 1u32..100_000, frac in 0u32..1000) {
        let negative = format!("-{n}");
        let decimal = format!("{n}.{frac}");
        prop_assert!(!is_valid_member_id(&negative));
        prop_assert!(!is_valid_member_id(&decimal));
    }
}

// ===== Property 2: Sanitisation =====

proptest! {
    #[test]
    fn sanitized_text_is_all_digits(s in any::<String>()) {
        let cleaned = sanitize_digits(&s);
        prop_assert!(cleaned.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn sanitizing_is_idempotent(s in any::<String>()) {
        let once = sanitize_digits(&s);
        prop_assert_eq!(sanitize_digits(&once), once.clone());
    }

    #[test]
    fn sanitizing_keeps_digits_in_order(s in "[0-9a-z ,.-]{0,40}") {
        let expected: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(sanitize_digits(&s), expected);
    }
}

// ===== Property 3: Formation parsing =====

proptest! {
    #[test]
    fn joined_formations_split_back_in_order(
        formations in prop::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,12}[A-Za-z0-9]", 1..8)
    ) {
        let raw = formations.join(", ");
        prop_assert_eq!(parse_formations(&raw), formations);
    }

    #[test]
    fn segment_count_matches_separator_count(raw in "[a-z, ]{0,40}") {
        let expected = raw.matches(", ").count() + 1;
        prop_assert_eq!(parse_formations(&raw).len(), expected);
    }
}
