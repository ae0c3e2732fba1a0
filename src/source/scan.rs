//! Directory enumeration for sessions and message files

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::{MESSAGE_GLOB, SESSION_GLOB};
use crate::core::Session;
use crate::utils::debug_enabled;

/// Modification time of a path, falling back to UNIX_EPOCH on error.
pub(crate) fn modified_time(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(UNIX_EPOCH)
}

/// Entries of `dir` whose file name matches `pattern`, sorted by name.
/// Only the file name is matched, so `dir` may contain glob
/// metacharacters or non-UTF-8 bytes.
fn entries_matching(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let pattern = match glob::Pattern::new(pattern) {
        Ok(pattern) => pattern,
        Err(err) => {
            if debug_enabled() {
                eprintln!("[DEBUG] Invalid pattern {pattern}: {err}");
            }
            return Vec::new();
        }
    };

    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| pattern.matches(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.path())
        .collect();
    paths.sort();
    paths
}

/// Session directories under `root`, most recently modified first.
/// Ties keep name order.
pub(crate) fn list_sessions(root: &Path) -> Vec<Session> {
    let mut sessions: Vec<Session> = entries_matching(root, SESSION_GLOB)
        .into_iter()
        .filter(|path| path.is_dir())
        .map(|path| {
            let modified = modified_time(&path);
            Session::new(path, modified)
        })
        .collect();

    sessions.sort_by(|a, b| b.modified.cmp(&a.modified));
    sessions
}

/// Message files in a session directory, in name order.
pub(crate) fn list_message_files(session_dir: &Path) -> Vec<PathBuf> {
    entries_matching(session_dir, MESSAGE_GLOB)
}

/// Message files in a session directory, oldest first.
/// Ties keep name order.
pub(crate) fn sorted_message_files(session_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<(SystemTime, PathBuf)> = list_message_files(session_dir)
        .into_iter()
        .map(|path| (modified_time(&path), path))
        .collect();

    files.sort_by_key(|(modified, _)| *modified);
    files.into_iter().map(|(_, path)| path).collect()
}
