use crate::domain::model::SubmissionPayload;
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{Result, SenderError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Posts payloads as JSON to the message service with reqwest.
pub struct ReqwestTransport {
    client: Client,
    url: Url,
}

impl ReqwestTransport {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            url: request_url(config.endpoint(), config.api_key())?,
        })
    }
}

/// Endpoint with the API key appended as the `api_key` query parameter.
pub fn request_url(endpoint: &str, api_key: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint).map_err(|e| SenderError::InvalidConfigValue {
        field: "endpoint".to_string(),
        value: endpoint.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    if !api_key.is_empty() {
        url.query_pairs_mut().append_pair("api_key", api_key);
    }
    Ok(url)
}

// reqwest 的錯誤帶有完整 URL (含 API key)
fn redact(e: reqwest::Error) -> SenderError {
    SenderError::Transport(e.without_url())
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, payload: &SubmissionPayload) -> Result<String> {
        let body = payload.to_json()?;

        // URL 含有 API key，只記錄 host 與 path
        tracing::debug!(
            "POST {}{} ({} bytes)",
            self.url.host_str().unwrap_or_default(),
            self.url.path(),
            body.len()
        );

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        tracing::debug!("Message service response status: {}", status);

        let text = response.text().await.map_err(redact)?;
        if !status.is_success() {
            return Err(SenderError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}
