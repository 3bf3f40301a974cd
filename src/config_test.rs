use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = Config::from_lookup(lookup_from(&[])).expect("defaults");
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
    assert_eq!(config.site_root, PathBuf::from("target/site"));
}

#[test]
fn explicit_values_override_defaults() {
    let config = Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 "), ("SITE_ROOT", "dist")]))
        .expect("valid config");
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.site_root, PathBuf::from("dist"));
}

#[test]
fn blank_site_root_falls_back() {
    let config = Config::from_lookup(lookup_from(&[("SITE_ROOT", "  ")])).expect("valid config");
    assert_eq!(config.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
}

#[test]
fn bad_port_is_rejected() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).expect_err("invalid port");
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "http"));
    assert_eq!(err.to_string(), "invalid PORT \"http\"");
}

#[test]
fn bad_host_is_rejected() {
    let err = Config::from_lookup(lookup_from(&[("HOST", "localhost:80")])).expect_err("invalid host");
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
}
