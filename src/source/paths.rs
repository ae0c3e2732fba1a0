//! Default storage root discovery

use std::env;
use std::path::{Path, PathBuf};

const DATA_HOME_ENV: &str = "XDG_DATA_HOME";
const DEFAULT_DATA_DIR: [&str; 2] = [".local", "share"];
const STORAGE_SUBDIR: [&str; 3] = ["opencode", "storage", "message"];

fn storage_under(data_home: &Path) -> PathBuf {
    STORAGE_SUBDIR
        .iter()
        .fold(data_home.to_path_buf(), |path, part| path.join(part))
}

/// Where opencode keeps per-session message directories.
///
/// Honors `XDG_DATA_HOME` when it is set to an absolute path, otherwise
/// falls back to `~/.local/share` on every platform, which is where
/// opencode itself writes.
pub(crate) fn default_storage_dir() -> Option<PathBuf> {
    if let Ok(data_home) = env::var(DATA_HOME_ENV) {
        let data_home = PathBuf::from(data_home);
        if data_home.is_absolute() {
            return Some(storage_under(&data_home));
        }
    }

    let home = dirs::home_dir()?;
    let data_home = DEFAULT_DATA_DIR
        .iter()
        .fold(home, |path, part| path.join(part));
    Some(storage_under(&data_home))
}
