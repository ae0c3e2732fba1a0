use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::OUTPUT_FILE;
use crate::core::MergedSession;
use crate::error::AppError;

/// Directory the merged document is written to.
/// An absolute `log_dir` replaces the workspace root.
pub(crate) fn destination_dir(workspace: &Path, log_dir: &Path) -> PathBuf {
    workspace.join(log_dir)
}

/// Pretty-printed JSON with 2-space indentation and no trailing newline.
/// Non-ASCII characters are written as `\uXXXX` escapes.
pub(crate) fn render_session(session: &MergedSession) -> Result<String, AppError> {
    let json = serde_json::to_string_pretty(session)?;
    Ok(escape_non_ascii(&json))
}

/// Replace every non-ASCII char with lowercase `\uXXXX` escapes, using a
/// surrogate pair above U+FFFF. serde_json output only carries non-ASCII
/// text inside string literals, so the result is still valid JSON.
fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_string();
    }

    let mut out = String::with_capacity(json.len() + json.len() / 4);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{unit:04x}"));
        }
    }
    out
}

/// Write `session` to `<dest_dir>/session.json`, replacing any previous copy.
pub(crate) fn write_session(dest_dir: &Path, session: &MergedSession) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dest_dir).map_err(|source| AppError::CreateDir {
        path: dest_dir.to_path_buf(),
        source,
    })?;

    let json = render_session(session)?;
    let path = dest_dir.join(OUTPUT_FILE);
    fs::write(&path, json).map_err(|source| AppError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn sample() -> MergedSession {
        MergedSession {
            session_id: "ses_B".to_string(),
            messages: vec![json!({"id": "msg_1", "role": "user"})],
        }
    }

    #[test]
    fn test_destination_dir_relative() {
        assert_eq!(
            destination_dir(Path::new("/ws"), Path::new(".opencode/logs")),
            PathBuf::from("/ws/.opencode/logs")
        );
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let out = render_session(&sample()).unwrap();
        let expected = r#"{
  "session_id": "ses_B",
  "messages": [
    {
      "id": "msg_1",
      "role": "user"
    }
  ]
}"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_escapes_non_ascii() {
        let session = MergedSession {
            session_id: "ses_A".to_string(),
            messages: vec![json!({"text": "café 😀", "ключ": 1})],
        };
        let out = render_session(&session).unwrap();
        assert!(out.is_ascii());
        assert!(out.contains(r#""text": "caf\u00e9 \ud83d\ude00""#));
        assert!(out.contains(r#""\u043a\u043b\u044e\u0447": 1"#));

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["messages"][0]["text"], "café 😀");
    }

    #[test]
    fn test_render_empty_messages() {
        let session = MergedSession {
            session_id: "ses_A".to_string(),
            messages: Vec::new(),
        };
        let out = render_session(&session).unwrap();
        assert_eq!(out, "{\n  \"session_id\": \"ses_A\",\n  \"messages\": []\n}");
    }

    #[test]
    fn test_write_creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("ws").join(".opencode").join("logs");

        let path = write_session(&dest, &sample()).unwrap();
        assert_eq!(path, dest.join(OUTPUT_FILE));

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["session_id"], "ses_B");
        assert_eq!(written["messages"][0]["role"], "user");
    }

    #[test]
    fn test_write_overwrites_previous_output() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("logs");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join(OUTPUT_FILE), "x".repeat(4096)).unwrap();

        let path = write_session(&dest, &sample()).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, render_session(&sample()).unwrap());
    }

    #[test]
    fn test_write_fails_when_destination_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("logs");
        fs::write(&blocker, "not a dir").unwrap();

        let err = write_session(&blocker, &sample()).unwrap_err();
        assert!(matches!(err, AppError::CreateDir { .. }));
    }
}
