/// Glob for session directories directly under the storage root: "ses_<token>"
pub(crate) const SESSION_GLOB: &str = "ses_*";

/// Glob for message files inside a session directory: "msg_<token>.json"
pub(crate) const MESSAGE_GLOB: &str = "msg_*.json";

/// How many message files the locator inspects per session
pub(crate) const DEFAULT_SCAN_LIMIT: usize = 10;

/// Output directory, relative to the workspace root
pub(crate) const DEFAULT_LOG_DIR: &str = ".opencode/logs";

/// Name of the merged session document inside the log directory
pub(crate) const OUTPUT_FILE: &str = "session.json";

/// Fallback value when a session directory has no usable name
pub(crate) const UNKNOWN: &str = "unknown";
