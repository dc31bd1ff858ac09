use std::collections::HashMap;
use std::env::VarError;

use chrono::{TimeZone, Utc};

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("unknown"), Environment::Development);
}

#[test]
fn build_app_config_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("expected defaults to parse");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_dir.to_str(), Some("./catalog"));
    assert!(!cfg.strict_validation);
    assert!(cfg.now_override.is_none());
}

#[test]
fn build_app_config_overrides() {
    let mut map = HashMap::new();
    map.insert("VARPICK_ENV", "production");
    map.insert("VARPICK_LOG_LEVEL", "debug");
    map.insert("VARPICK_CATALOG_DIR", "/srv/catalog");
    map.insert("VARPICK_STRICT_VALIDATION", "true");
    map.insert("VARPICK_NOW", "2026-03-01T12:00:00Z");
    let cfg = build_app_config(lookup_from_map(&map)).expect("expected overrides to parse");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.catalog_dir.to_str(), Some("/srv/catalog"));
    assert!(cfg.strict_validation);
    let expected = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(cfg.now_override, Some(expected));
    assert_eq!(cfg.now(), expected);
}

#[test]
fn production_defaults_to_strict_validation() {
    let mut map = HashMap::new();
    map.insert("VARPICK_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.strict_validation);

    map.insert("VARPICK_STRICT_VALIDATION", "false");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(!cfg.strict_validation);
}

#[test]
fn strict_validation_accepts_numeric_flags() {
    let mut map = HashMap::new();
    map.insert("VARPICK_STRICT_VALIDATION", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(!cfg.strict_validation);
}

#[test]
fn strict_validation_invalid() {
    let mut map = HashMap::new();
    map.insert("VARPICK_STRICT_VALIDATION", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VARPICK_STRICT_VALIDATION"),
        "expected InvalidEnvVar(VARPICK_STRICT_VALIDATION), got: {result:?}"
    );
}

#[test]
fn now_override_invalid() {
    let mut map = HashMap::new();
    map.insert("VARPICK_NOW", "yesterday");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VARPICK_NOW"),
        "expected InvalidEnvVar(VARPICK_NOW), got: {result:?}"
    );
}

#[test]
fn now_override_converts_offset_to_utc() {
    let mut map = HashMap::new();
    map.insert("VARPICK_NOW", "2026-03-01T14:00:00+02:00");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.now_override,
        Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
    );
}
