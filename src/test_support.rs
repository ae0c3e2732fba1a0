//! Helpers for building synthetic storage roots in tests

use std::fs;
use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};

/// Write `content` to `path`, creating parent directories.
pub(crate) fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Pin the modification time of a file or directory to `secs` after the epoch.
///
/// Directory mtimes change whenever an entry is added, so set them only
/// after the directory is fully populated.
pub(crate) fn set_mtime(path: &Path, secs: u64) {
    let file = fs::File::open(path).unwrap();
    file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}
