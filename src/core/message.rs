//! Per-file reads
//!
//! Every read yields either a value or a `SkipReason`; nothing here is
//! allowed to abort the run.

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::types::SkipReason;
use crate::utils::debug_enabled;

/// Raw contents of a message file, for marker matching
pub(super) fn read_raw(path: &Path) -> Result<String, SkipReason> {
    Ok(fs::read_to_string(path)?)
}

/// A message file parsed as a JSON document
pub(super) fn read_message(path: &Path) -> Result<Value, SkipReason> {
    let content = read_raw(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub(super) fn report_skip(path: &Path, reason: &SkipReason) {
    if debug_enabled() {
        eprintln!("[DEBUG] Skipping {}: {}", path.display(), reason);
    }
}
