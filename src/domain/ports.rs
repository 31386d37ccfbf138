use crate::domain::model::{FormControl, StatusBanner, SubmissionPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The page hosting the form: its controls, the submit button, the message
/// field and the status banner.
pub trait Page: Send {
    fn controls(&self) -> Vec<FormControl>;
    fn set_busy(&mut self, busy: bool);
    fn clear_message(&mut self);
    fn show_status(&mut self, banner: &StatusBanner);
    fn hide_status(&mut self);
}

/// Sends a payload to the remote service and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: &SubmissionPayload) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
