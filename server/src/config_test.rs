use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", ""), ("PORT", "  ")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_lookup_rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".into()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort("70000".into()))
    );
    assert_eq!(ServerConfig::from_lookup(lookup(&[("PORT", "0")])), Err(ConfigError::InvalidPort("0".into())));
}

#[test]
fn from_lookup_rejects_bad_host() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])),
        Err(ConfigError::InvalidHost("localhost".into()))
    );
}
