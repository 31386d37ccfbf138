use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DESTINATION_FIELD: &str = "destination";
pub const DESTNUMBER_FIELD: &str = "destnumber";
pub const USERNAME_FIELD: &str = "username";
pub const PASSWORD_FIELD: &str = "password";
pub const MESSAGE_FIELD: &str = "msg";

/// 表單欄位名稱 -> 值
pub type FormData = BTreeMap<String, String>;

/// One serializable control of the form. Unnamed controls are never submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    pub name: Option<String>,
    pub value: String,
}

impl FormControl {
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    pub fn unnamed(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDestination {
    /// Exactly nine ASCII digits.
    pub number: String,
    /// Free-form label after the number, possibly empty.
    pub name: String,
}

/// Body of the outgoing request: the form fields with `destination`
/// replaced by the parsed `destnumber`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    fields: FormData,
}

impl SubmissionPayload {
    pub fn new(mut fields: FormData, destination: &ParsedDestination) -> Self {
        fields.remove(DESTINATION_FIELD);
        fields.insert(DESTNUMBER_FIELD.to_string(), destination.number.clone());
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.fields)
    }
}

// 不要把密碼寫進日誌
impl fmt::Debug for SubmissionPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.fields {
            if key == PASSWORD_FIELD {
                map.entry(key, &"***");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
    /// Any other kind name; styled like `Info` but labelled with its own name.
    Other(String),
}

impl StatusKind {
    pub fn parse(kind: &str) -> Self {
        match kind.to_lowercase().as_str() {
            "success" => StatusKind::Success,
            "error" => StatusKind::Error,
            "info" => StatusKind::Info,
            _ => StatusKind::Other(kind.to_string()),
        }
    }
}

/// Rendered status banner, ready to be drawn by a [`crate::domain::ports::Page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub css_class: &'static str,
    pub icon_class: &'static str,
    /// Screen-reader prefix such as `Error:`.
    pub sr_label: String,
    pub text: String,
}

/// JSON status object returned by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RemoteStatus {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RemoteStatus {
    pub fn is_ok(&self) -> bool {
        matches!(&self.status, Some(serde_json::Value::String(s)) if s == "ok")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// `destination` missing or not a nine-digit number.
    UnparsableDestination,
    /// Strict validation rejected the payload.
    InvalidPayload,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was sent and the page was left untouched.
    Aborted(AbortReason),
    /// The service answered `status: "ok"`.
    Sent,
    /// The service answered with any other status.
    Rejected(RemoteStatus),
    /// Transport failure or unreadable response.
    Failed(crate::utils::error::SenderError),
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}
