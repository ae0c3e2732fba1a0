//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{Config, Settings};
use crate::consts::{DEFAULT_LOG_DIR, DEFAULT_SCAN_LIMIT};
use crate::error::AppError;
use crate::source::default_storage_dir;

#[derive(Parser)]
#[command(name = "copy-session")]
#[command(
    about = "Copy the latest opencode session for a workspace into one JSON log",
    version
)]
pub(crate) struct Cli {
    /// Session storage root (directory holding ses_* directories)
    #[arg(short, long, value_name = "DIR")]
    pub(crate) storage: Option<PathBuf>,

    /// Workspace root; defaults to the current directory
    #[arg(short, long, value_name = "DIR")]
    pub(crate) workspace: Option<PathBuf>,

    /// Text that identifies the workspace in message files (default: workspace path)
    #[arg(short, long, value_name = "TEXT")]
    pub(crate) marker: Option<String>,

    /// Message files inspected per session while locating
    #[arg(short = 'l', long, value_name = "N")]
    pub(crate) scan_limit: Option<usize>,

    /// Output directory, relative to the workspace
    #[arg(long, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    /// Locate and merge, but do not write the session file
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Enable debug output (skipped files, scan details)
    #[arg(long)]
    pub(crate) debug: bool,
}

/// Absolute form of `path` with `.` segments and trailing separators removed.
/// Symlinks are left alone so the result matches what tools record.
fn normalize_workspace(path: &Path) -> Result<PathBuf, AppError> {
    let absolute = std::path::absolute(path).map_err(AppError::CurrentDir)?;
    Ok(absolute.components().collect())
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.storage.is_none() {
            self.storage = config.storage.clone();
        }
        if self.workspace.is_none() {
            self.workspace = config.workspace.clone();
        }
        if self.marker.is_none() {
            self.marker = config.marker.clone();
        }
        if self.log_dir.is_none() {
            self.log_dir = config.log_dir.clone();
        }
        if self.scan_limit.is_none() {
            self.scan_limit = config.scan_limit;
        }

        self
    }

    /// Fill in defaults for everything neither the CLI nor config set
    pub(crate) fn resolve(self) -> Result<Settings, AppError> {
        let workspace = match self.workspace {
            Some(path) => normalize_workspace(&path)?,
            None => std::env::current_dir().map_err(AppError::CurrentDir)?,
        };

        let storage = match self.storage {
            Some(path) => path,
            None => default_storage_dir().ok_or(AppError::NoHomeDir)?,
        };

        let marker = self
            .marker
            .unwrap_or_else(|| workspace.to_string_lossy().into_owned());

        Ok(Settings {
            storage,
            workspace,
            marker,
            log_dir: self.log_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            scan_limit: self.scan_limit.unwrap_or(DEFAULT_SCAN_LIMIT),
            dry_run: self.dry_run,
            debug: self.debug,
        })
    }
}
