use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "session-copy";
const CONFIG_FILE: &str = "config.toml";
const HOME_CONFIG_FILE: &str = ".session-copy.toml";

/// Optional settings read from a TOML file; CLI flags take precedence.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) storage: Option<PathBuf>,
    #[serde(default)]
    pub(crate) workspace: Option<PathBuf>,
    #[serde(default)]
    pub(crate) marker: Option<String>,
    #[serde(default)]
    pub(crate) log_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) scan_limit: Option<usize>,
    #[serde(default)]
    pub(crate) debug: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    /// Directory holding `ses_*` session directories
    pub(crate) storage: PathBuf,
    /// Workspace root; the log directory is resolved against it
    pub(crate) workspace: PathBuf,
    /// Literal text that ties a message to the workspace
    pub(crate) marker: String,
    pub(crate) log_dir: PathBuf,
    pub(crate) scan_limit: usize,
    pub(crate) dry_run: bool,
    /// Report skipped files and scan details on stderr
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/session-copy/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join(CONFIG_FILE));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support on macOS
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join(CONFIG_FILE);
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.session-copy.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(HOME_CONFIG_FILE));
        }

        paths
    }
}
