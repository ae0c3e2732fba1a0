//! Message merger

use super::message::{read_message, report_skip};
use super::types::{MergeResult, MergedSession, Session};
use crate::source::sorted_message_files;

/// Parse every message file of `session`, oldest first.
///
/// Files that cannot be read or parsed are left out and counted; an
/// empty message list is a valid result.
pub(crate) fn merge_messages(session: &Session) -> MergeResult {
    let mut messages = Vec::new();
    let mut skipped = 0;

    for path in sorted_message_files(&session.path) {
        match read_message(&path) {
            Ok(message) => messages.push(message),
            Err(reason) => {
                skipped += 1;
                report_skip(&path, &reason);
            }
        }
    }

    MergeResult {
        session: MergedSession {
            session_id: session.id.clone(),
            messages,
        },
        skipped,
    }
}
