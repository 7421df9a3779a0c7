use std::fmt;
use std::sync::Arc;

use an_core::{Result, SummaryTransport};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
}

/// Hugging Face inference API running a summarization model.
pub struct HuggingFaceTransport {
    client: Arc<Client>,
    api_url: String,
    token: Option<String>,
}

impl HuggingFaceTransport {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        Self::with_client(Arc::new(Client::new()), api_url, token)
    }

    pub fn with_client(client: Arc<Client>, api_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }
}

impl fmt::Debug for HuggingFaceTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceTransport")
            .field("client", &"<reqwest::Client>")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Pulls `summary_text` out of `[{"summary_text": ...}]` or a bare object.
pub fn extract_summary_text(response: &Value) -> Option<String> {
    let node = match response {
        Value::Array(items) => items.first()?,
        other => other,
    };
    node.get("summary_text")?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl SummaryTransport for HuggingFaceTransport {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn summarize(&self, input: &str) -> Result<Option<String>> {
        let mut request = self
            .client
            .post(&self.api_url)
            .json(&SummaryRequest { inputs: input });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        let summary = extract_summary_text(&response);
        if summary.is_none() {
            tracing::debug!("No summary_text in response: {}", response);
        }
        Ok(summary)
    }
}
