//! Free functions over the shared default configuration.

use textshape_validator::defaults;
use textshape_validator::prelude::*;

#[test]
fn default_configuration_is_lenient() {
    let config = defaults::default_configuration();
    assert_eq!(config.mode(), ValidationMode::Default);
    assert!(defaults::is_uuid().check(""));
    assert!(defaults::is_isbn13().check(""));
}

#[test]
fn free_functions_match_configuration_accessors() {
    let config = Configuration::default();
    for value in ["", "abc", "ABC", "123", "user@example.com", "192.168.1.1", "::1"] {
        assert_eq!(defaults::is_alpha().check(value), config.is_alpha().check(value));
        assert_eq!(defaults::is_email().check(value), config.is_email().check(value));
        assert_eq!(defaults::is_ip().check(value), config.is_ip().check(value));
        assert_eq!(defaults::is_uppercase().check(value), config.is_uppercase().check(value));
    }
}

#[test]
fn parameterized_free_functions() {
    assert!(defaults::is_phone("ru-RU").unwrap().check("+79123456789"));
    assert!(defaults::is_phone("xx-XX").is_err());
    assert!(defaults::is_isbn("10").unwrap().check("080442957X"));
    assert!(defaults::is_after("01/01/2020").unwrap().check("01/01/2020"));
    assert!(defaults::is_fqdn(FqdnOptions::DEFAULT).check("example.org"));
    assert!(defaults::max_length_with(3, LengthMode::Bytes).check("abc"));
    assert!(!defaults::max_length_with(3, LengthMode::Bytes).check("äbc"));
}

#[test]
fn dispatch_by_name() {
    let predicate = defaults::predicate_for("isHexColor", &[]).unwrap();
    assert!(predicate.check("#1f2"));
    assert!(matches!(
        defaults::predicate_for("isColour", &[]),
        Err(ConfigError::UnknownValidator(_))
    ));
}

#[test]
fn predicates_are_shareable_across_threads() {
    let predicate = defaults::is_email();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let predicate = predicate.clone();
            scope.spawn(move || {
                for _ in 0..100 {
                    assert!(predicate.check("user@example.com"));
                    assert!(!predicate.check("user@"));
                }
            });
        }
    });
}
