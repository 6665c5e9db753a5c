use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "  On  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "No"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig::from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_bind_addr() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr(_)));
}

#[test]
fn blank_log_filter_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup_from(&[("LOG_FILTER", "   ")])).unwrap();
    assert_eq!(config.log_filter, "info");
    let config = ServerConfig::from_lookup(lookup_from(&[("LOG_FILTER", "clinic_server=debug")])).unwrap();
    assert_eq!(config.log_filter, "clinic_server=debug");
}

#[test]
fn cors_flag_parses_and_rejects_garbage() {
    let config = ServerConfig::from_lookup(lookup_from(&[("CORS_PERMISSIVE", "off")])).unwrap();
    assert!(!config.cors_permissive);
    let err = ServerConfig::from_lookup(lookup_from(&[("CORS_PERMISSIVE", "sometimes")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBool(_)));
}
