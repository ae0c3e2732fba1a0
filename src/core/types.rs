//! Core data types shared by the locator, merger and writer
//!
//! Sessions and messages are read-only inputs; `MergedSession` is the only
//! thing this tool ever produces.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

use crate::consts::UNKNOWN;

/// A session directory in the storage root
#[derive(Debug, Clone)]
pub(crate) struct Session {
    /// Directory basename, e.g. "ses_4f2a..."
    pub(crate) id: String,
    pub(crate) path: PathBuf,
    pub(crate) modified: SystemTime,
}

impl Session {
    pub(crate) fn new(path: PathBuf, modified: SystemTime) -> Self {
        let id = session_id_from_path(&path);
        Self { id, path, modified }
    }
}

fn session_id_from_path(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// The document written to the workspace log directory.
///
/// Field order here is the field order in the output file.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MergedSession {
    pub(crate) session_id: String,
    pub(crate) messages: Vec<Value>,
}

/// Merged session plus the number of message files that were skipped
#[derive(Debug, Clone)]
pub(crate) struct MergeResult {
    pub(crate) session: MergedSession,
    pub(crate) skipped: usize,
}

/// Why a single message file was left out
#[derive(Debug, Error)]
pub(crate) enum SkipReason {
    #[error("unreadable: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
