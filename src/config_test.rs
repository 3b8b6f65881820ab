use super::*;

// =============================================================================
// normalize_api_url
// =============================================================================

#[test]
fn api_url_defaults_to_local_cms() {
    assert_eq!(normalize_api_url(None), "http://127.0.0.1:1337");
}

#[test]
fn api_url_blank_falls_back_to_default() {
    assert_eq!(normalize_api_url(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn api_url_trailing_slashes_trimmed() {
    assert_eq!(normalize_api_url(Some("https://cms.example.com//")), "https://cms.example.com");
}

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn port_defaults_when_unset_or_empty() {
    assert_eq!(parse_port(None).unwrap(), 3000);
    assert_eq!(parse_port(Some("")).unwrap(), 3000);
}

#[test]
fn port_parses_valid_value() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(err.to_string().contains("PORT"));
    assert!(parse_port(Some("70000")).is_err());
}

// =============================================================================
// env_parse_u64: unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_u64_reads_value() {
    let key = "__TEST_CFG_U64_OK_311__";
    unsafe { std::env::set_var(key, "45") };
    assert_eq!(env_parse_u64(key, 1), 45);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_invalid_uses_default() {
    let key = "__TEST_CFG_U64_BAD_312__";
    unsafe { std::env::set_var(key, "-3") };
    assert_eq!(env_parse_u64(key, 7), 7);
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// URL helpers
// =============================================================================

fn config() -> Config {
    Config {
        api_url: "http://cms.local".into(),
        api_key: String::new(),
        port: DEFAULT_PORT,
        timeouts: CmsTimeouts {
            request_secs: DEFAULT_CMS_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CMS_CONNECT_TIMEOUT_SECS,
        },
    }
}

#[test]
fn graphql_url_appends_graphql() {
    assert_eq!(config().graphql_url(), "http://cms.local/graphql");
}

#[test]
fn rest_url_prefixes_api() {
    assert_eq!(config().rest_url("/auth/send-otp"), "http://cms.local/api/auth/send-otp");
}
