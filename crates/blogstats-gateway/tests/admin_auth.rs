#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::http::{header, HeaderMap};

use blogstats_gateway::auth::{supplied_token, AdminToken};
use blogstats_gateway::config::AdminSection;

#[test]
fn unset_secret_rejects_everything() {
    let t = AdminToken::new(None);
    assert!(!t.is_configured());
    assert!(t.authorize(None).is_err());
    assert!(t.authorize(Some("")).is_err());
    assert!(AdminToken::new(Some(String::new())).authorize(Some("")).is_err());
}

#[test]
fn exact_match_only() {
    let t = AdminToken::new(Some("s3cret".into()));
    assert!(t.authorize(Some("s3cret")).is_ok());
    assert!(t.authorize(Some("s3cre")).is_err());
    assert!(t.authorize(Some("s3cret!")).is_err());
    assert!(t.authorize(Some("S3CRET")).is_err());
    assert!(t.authorize(None).is_err());
}

#[test]
fn debug_output_hides_secret() {
    let t = AdminToken::new(Some("s3cret".into()));
    assert!(!format!("{t:?}").contains("s3cret"));
}

#[test]
fn query_wins_over_header() {
    let mut h = HeaderMap::new();
    h.insert(header::AUTHORIZATION, "Bearer from-header".parse().unwrap());
    assert_eq!(supplied_token(Some("from-query"), &h), Some("from-query"));
    assert_eq!(supplied_token(None, &h), Some("from-header"));
    assert_eq!(supplied_token(None, &HeaderMap::new()), None);

    let mut basic = HeaderMap::new();
    basic.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
    assert_eq!(supplied_token(None, &basic), None);
}

#[test]
fn env_secret_overrides_config_secret() {
    let admin = AdminSection {
        token: Some("from-file".into()),
        token_env: "BLOG_ADMIN_TOKEN".into(),
    };
    let env = |k: &str| (k == "BLOG_ADMIN_TOKEN").then(|| "from-env".to_string());
    assert_eq!(admin.resolve_token(env).as_deref(), Some("from-env"));
    assert_eq!(admin.resolve_token(|_| None).as_deref(), Some("from-file"));
    assert_eq!(admin.resolve_token(|_| Some(String::new())).as_deref(), Some("from-file"));

    let none = AdminSection::default();
    assert_eq!(none.resolve_token(|_| None), None);
}
