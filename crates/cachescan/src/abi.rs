//! Structural parsing of JSON ABI definitions.
//!
//! The detail scan only needs counts, not the full signature model: how many
//! entries describe functions, how many describe events, and how many are
//! anything else (constructors, fallbacks, receive handlers, errors).
//! Entries without a `type` field default to `function`, matching the
//! Solidity JSON ABI convention.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Signature counts derived from one ABI definition file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AbiCounts {
    pub n_functions: u64,
    pub n_events: u64,
    pub n_other: u64,
}

/// Parse the file at `path` as a JSON ABI and count its entries.
///
/// Accepts either a bare entry array or an object wrapping one in an `abi`
/// field (the form some explorers export). Anything else, including files
/// that are not JSON at all, fails with [`Error::MalformedAbi`].
pub fn load_counts(path: &Path) -> Result<AbiCounts> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|err| malformed(path, &err.to_string()))?;

    let entries = match &value {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(obj) => match obj.get("abi").and_then(Value::as_array) {
            Some(entries) => entries.as_slice(),
            None => return Err(malformed(path, "no ABI entry array found")),
        },
        _ => return Err(malformed(path, "expected an ABI entry array")),
    };

    let mut counts = AbiCounts::default();
    for entry in entries {
        match entry.get("type").and_then(Value::as_str).unwrap_or("function") {
            "function" => counts.n_functions += 1,
            "event" => counts.n_events += 1,
            _ => counts.n_other += 1,
        }
    }
    Ok(counts)
}

fn malformed(path: &Path, message: &str) -> Error {
    Error::MalformedAbi {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
