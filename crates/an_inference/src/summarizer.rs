use std::sync::Arc;

use an_core::{Article, SummaryTransport, SUMMARY_UNAVAILABLE};
use an_storage::cache::summary_key;
use an_storage::Cache;

use crate::fallback::fallback_summarize;

/// Two-tier summarizer: remote service first, local heuristic when it fails.
///
/// Results are cached under the first 100 characters of the input, whichever
/// tier produced them.
#[derive(Clone)]
pub struct Summarizer {
    transport: Arc<dyn SummaryTransport>,
    cache: Cache,
}

impl Summarizer {
    pub fn new(transport: Arc<dyn SummaryTransport>, cache: Cache) -> Self {
        Self { transport, cache }
    }

    /// Always returns something displayable.
    pub async fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return SUMMARY_UNAVAILABLE.to_string();
        }

        let key = summary_key(text);
        if let Some(cached) = self.cache.get::<String>(&key) {
            return cached;
        }

        let summary = match self.transport.summarize(text).await {
            Ok(Some(summary)) => summary,
            Ok(None) => {
                tracing::warn!("{} returned no summary, using fallback", self.transport.name());
                fallback_summarize(text)
            }
            Err(e) => {
                tracing::error!("Primary summarizer ({}) failed: {}", self.transport.name(), e);
                fallback_summarize(text)
            }
        };

        self.cache.set(&key, &summary);
        summary
    }

    pub async fn summarize_article(&self, article: &Article) -> String {
        self.summarize(article.summary_source()).await
    }
}
