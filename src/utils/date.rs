use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Render a filesystem timestamp in local time for diagnostics
pub(crate) fn format_mtime(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}
