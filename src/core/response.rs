//! The message service answers with a few lines of log text followed by the
//! JSON status object. Everything that knows about that layout lives here.

use crate::domain::model::RemoteStatus;
use crate::utils::error::{Result, SenderError};

/// First line of `body` whose trimmed content starts with `{`.
pub fn extract_json_line(body: &str) -> Option<&str> {
    body.split('\n')
        .map(str::trim)
        .find(|line| line.starts_with('{'))
}

pub fn parse_remote_status(body: &str) -> Result<RemoteStatus> {
    let line = extract_json_line(body).ok_or_else(|| SenderError::MalformedResponse {
        message: "response has no JSON line".to_string(),
    })?;

    serde_json::from_str(line).map_err(|e| SenderError::MalformedResponse {
        message: format!("invalid JSON status line: {}", e),
    })
}
