//! Session locator
//!
//! Walks session directories newest first and picks the first one whose
//! messages mention the workspace marker.

use std::path::Path;

use super::message::{read_raw, report_skip};
use super::types::Session;
use crate::source::{list_message_files, list_sessions};
use crate::utils::debug_enabled;

/// Find the most recently modified session that mentions `marker`.
///
/// Only the first `scan_limit` message files of each session (in
/// enumeration order) are inspected, so a session whose only matching
/// message falls past the cap is not selected.
pub(crate) fn locate_session(storage: &Path, marker: &str, scan_limit: usize) -> Option<Session> {
    let sessions = list_sessions(storage);

    if debug_enabled() {
        eprintln!(
            "[DEBUG] Scanning {} sessions in {}",
            sessions.len(),
            storage.display()
        );
    }

    sessions
        .into_iter()
        .find(|session| mentions_marker(session, marker, scan_limit))
}

fn mentions_marker(session: &Session, marker: &str, scan_limit: usize) -> bool {
    list_message_files(&session.path)
        .iter()
        .take(scan_limit)
        .any(|path| match read_raw(path) {
            Ok(content) => content.contains(marker),
            Err(reason) => {
                report_skip(path, &reason);
                false
            }
        })
}
