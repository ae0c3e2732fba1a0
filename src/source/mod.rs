//! Session storage layout
//!
//! opencode keeps one directory per session under its storage root
//! (`ses_<token>/`), each holding one JSON file per message
//! (`msg_<token>.json`).

mod paths;
mod scan;

pub(crate) use paths::default_storage_dir;
pub(crate) use scan::{list_message_files, list_sessions, sorted_message_files};
