//! JSON test vector loader shared by payload tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub raw: String,
    #[serde(default)]
    pub expect: Option<ExpectEvent>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectEvent {
    pub kind: String,
    pub slug: String,
    pub t_ms: u64,
    pub scroll_pct: f64,
}

pub fn load(name: &str) -> Vec<TestVector> {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).expect("invalid vector file")
}
