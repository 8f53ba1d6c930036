//! Loading a configuration from serialized settings.

use pretty_assertions::assert_eq;
use textshape_validator::prelude::*;

#[test]
fn empty_document_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    let config = Configuration::from_settings(&settings).unwrap();
    assert_eq!(config.mode(), ValidationMode::Default);
    assert_eq!(config.date_format().pattern(), "dd/MM/yyyy");
}

#[test]
fn full_document() {
    let settings: Settings =
        serde_json::from_str(r#"{"mode": "strict", "date_format": "yyyy-MM-dd"}"#).unwrap();
    let config = Configuration::from_settings(&settings).unwrap();

    assert_eq!(config.mode(), ValidationMode::Strict);
    assert!(config.is_date().check("2024-02-29"));
    assert!(!config.is_date().check(""));
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(serde_json::from_str::<Settings>(r#"{"mode": "lenient"}"#).is_err());
}

#[test]
fn bad_date_format_is_a_config_error() {
    let settings: Settings = serde_json::from_str(r#"{"date_format": "QQQ yyyy"}"#).unwrap();
    let error = Configuration::from_settings(&settings).unwrap_err();
    insta::assert_snapshot!(
        error.to_string(),
        @"invalid date format `QQQ yyyy`: unsupported field `QQQ`"
    );
}

#[test]
fn settings_round_trip_through_json() {
    let settings = Settings {
        mode: ValidationMode::Strict,
        date_format: "d MMM yyyy".to_owned(),
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(json, r#"{"mode":"strict","date_format":"d MMM yyyy"}"#);
    assert_eq!(serde_json::from_str::<Settings>(&json).unwrap(), settings);
}

#[test]
fn fqdn_options_from_json() {
    let options: FqdnOptions =
        serde_json::from_str(r#"{"require_tld": false, "allow_underscores": true}"#).unwrap();
    let config = Configuration::new(ValidationMode::Strict);
    assert!(config.is_fqdn(options).check("my__host"));
}
