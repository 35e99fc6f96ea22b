//! JSON reporter
//!
//! Outputs reports and graph data as pretty-printed JSON in the camelCase
//! shape the web frontend consumes.

use anyhow::Result;
use serde::Serialize;

pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
