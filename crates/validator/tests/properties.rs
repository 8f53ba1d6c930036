//! Property-based tests for textshape-validator.

use proptest::prelude::*;
use textshape_validator::prelude::*;

fn configs() -> impl Strategy<Value = Configuration> {
    prop_oneof![
        Just(Configuration::new(ValidationMode::Default)),
        Just(Configuration::new(ValidationMode::Strict)),
    ]
}

// ============================================================================
// IDEMPOTENCY: building the same predicate twice gives the same answers
// ============================================================================

proptest! {
    #[test]
    fn rebuilt_predicates_agree(config in configs(), s in ".{0,40}") {
        for kind in ValidatorKind::ALL {
            let args: &[&str] = match kind {
                ValidatorKind::ExactLength
                | ValidatorKind::MinLength
                | ValidatorKind::MaxLength => &["4"],
                ValidatorKind::IsAfter | ValidatorKind::IsBefore => &["01/01/2000"],
                ValidatorKind::IsIsbn => &["10"],
                ValidatorKind::IsPhone => &["en-US"],
                _ if kind.requires_argument() => &["ab"],
                _ => &[],
            };
            let first = config.predicate_for(kind.name(), args).unwrap();
            let second = config.predicate_for(kind.name(), args).unwrap();
            prop_assert_eq!(first.check(&s), second.check(&s), "{}", kind);
            prop_assert_eq!(first.check(&s), first.check(&s), "{}", kind);
        }
    }

    #[test]
    fn ipv6_idempotent(s in "[0-9a-f:.]{0,40}") {
        let config = Configuration::new(ValidationMode::Strict);
        prop_assert_eq!(config.is_ipv6().check(&s), config.is_ipv6().check(&s));
    }
}

// ============================================================================
// GATE: non-empty values never depend on the mode
// ============================================================================

proptest! {
    #[test]
    fn mode_only_matters_for_empty(s in ".{1,30}") {
        let lenient = Configuration::new(ValidationMode::Default);
        let strict = Configuration::new(ValidationMode::Strict);
        for kind in ValidatorKind::ALL.iter().filter(|k| !k.requires_argument()) {
            let a = lenient.predicate_for(kind.name(), &[]).unwrap();
            let b = strict.predicate_for(kind.name(), &[]).unwrap();
            prop_assert_eq!(a.check(&s), b.check(&s), "{}", kind);
        }
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_passes_iff_both_pass(s in ".{0,30}") {
        let config = Configuration::new(ValidationMode::Strict);
        let combined = config.min_length(3).and(config.max_length(10));
        let expected = config.min_length(3).check(&s) && config.max_length(10).check(&s);
        prop_assert_eq!(combined.check(&s), expected);
        prop_assert_eq!(combined.validate(&s).is_ok(), expected);
    }

    #[test]
    fn or_passes_iff_either_passes(s in "[a-z0-9]{0,20}") {
        let config = Configuration::new(ValidationMode::Strict);
        let combined = config.is_numeric().or(config.is_alpha());
        let expected = config.is_numeric().check(&s) || config.is_alpha().check(&s);
        prop_assert_eq!(combined.check(&s), expected);
        prop_assert_eq!(combined.validate(&s).is_ok(), expected);
    }

    #[test]
    fn double_negation_is_identity(s in ".{0,20}") {
        let config = Configuration::new(ValidationMode::Default);
        prop_assert_eq!(config.is_email().not().not().check(&s), config.is_email().check(&s));
    }
}

// ============================================================================
// ISBN: a single-digit error is always detected
// ============================================================================

fn isbn10_check_digit(body: &[u32]) -> char {
    let sum: u32 = body.iter().enumerate().map(|(i, d)| (i as u32 + 1) * d).sum();
    match sum % 11 {
        10 => 'X',
        d => char::from_digit(d, 10).unwrap(),
    }
}

proptest! {
    #[test]
    fn generated_isbn10_validates(body in prop::collection::vec(0u32..10, 9)) {
        let mut isbn: String = body.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect();
        isbn.push(isbn10_check_digit(&body));
        let config = Configuration::new(ValidationMode::Strict);
        prop_assert!(config.is_isbn10().check(&isbn), "{}", isbn);
    }

    #[test]
    fn isbn10_single_digit_mutation_fails(
        body in prop::collection::vec(0u32..10, 9),
        position in 0usize..9,
        delta in 1u32..10,
    ) {
        let check = isbn10_check_digit(&body);
        let mut mutated = body.clone();
        mutated[position] = (mutated[position] + delta) % 10;

        let mut isbn: String = mutated.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect();
        isbn.push(check);
        let config = Configuration::new(ValidationMode::Strict);
        prop_assert!(!config.is_isbn10().check(&isbn), "{}", isbn);
    }
}

// ============================================================================
// LENGTH: grapheme count never exceeds char count
// ============================================================================

proptest! {
    #[test]
    fn graphemes_not_more_than_chars(s in ".{0,30}") {
        prop_assert!(LengthMode::Graphemes.measure(&s) <= LengthMode::Chars.measure(&s));
        prop_assert!(LengthMode::Chars.measure(&s) <= LengthMode::Bytes.measure(&s));
    }
}
