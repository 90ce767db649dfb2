//! JSON test vector loader for discovery-response tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    /// Raw upstream body. Stored as a string so malformed JSON can be expressed.
    pub body: String,
    #[serde(default)]
    pub expect: Option<Expect>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct Expect {
    pub status: String,
    pub success: bool,
    pub targets: Vec<ExpectTarget>,
    #[serde(default)]
    pub error_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectTarget {
    pub scrape_url: String,
    pub job: String,
    pub health: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub kind: String,
}

pub fn load(name: &str) -> TestVector {
    let s = std::fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
