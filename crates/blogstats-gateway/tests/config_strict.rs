#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use blogstats_gateway::config::{self, StoreKind};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  max_body_byte: 123 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.max_body_bytes, 4096);
    assert_eq!(cfg.admin.token_env, "BLOG_ADMIN_TOKEN");
    assert_eq!(cfg.store.kind, StoreKind::Memory);
    assert!(cfg.ingest.serialize_per_slug);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
  max_body_bytes: 2048
admin:
  token: "inline"
  token_env: "STATS_TOKEN"
store:
  kind: file
  path: "/var/lib/blogstats/data.json"
ingest:
  serialize_per_slug: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
    assert_eq!(cfg.admin.token.as_deref(), Some("inline"));
    assert_eq!(cfg.store.kind, StoreKind::File);
    assert!(!cfg.ingest.serialize_per_slug);
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn file_store_requires_path() {
    let bad = "version: 1\nstore:\n  kind: file\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn bad_listen_rejected() {
    let bad = "version: 1\nserver:\n  listen: \"not-an-addr\"\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn missing_file_uses_defaults() {
    let cfg = config::load_from_file("/nonexistent/blogstats.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
}
