use std::sync::Arc;

use an_core::{Article, NewsConfig, SummaryTransport, INSIGHT_UNAVAILABLE};

/// Number of leading articles folded into the weekly insight.
pub const INSIGHT_ARTICLE_COUNT: usize = 10;

/// Builds the single prompt sent for the weekly insight.
pub fn compose_insight_input(prompt: &str, articles: &[Article]) -> String {
    let combined = articles
        .iter()
        .take(INSIGHT_ARTICLE_COUNT)
        .map(|a| format!("{}. {}", a.title, a.description))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}\n\n{}", prompt, combined)
}

/// One-paragraph digest of the latest articles.
///
/// Goes straight to the transport: no cache and no local fallback.
#[derive(Clone)]
pub struct InsightGenerator {
    transport: Arc<dyn SummaryTransport>,
    prompt: String,
}

impl InsightGenerator {
    pub fn new(config: &NewsConfig, transport: Arc<dyn SummaryTransport>) -> Self {
        Self {
            transport,
            prompt: config.insight_prompt.clone(),
        }
    }

    pub async fn generate(&self, articles: &[Article]) -> String {
        if articles.is_empty() {
            return INSIGHT_UNAVAILABLE.to_string();
        }
        let input = compose_insight_input(&self.prompt, articles);
        match self.transport.summarize(&input).await {
            Ok(Some(insight)) => insight,
            Ok(None) => INSIGHT_UNAVAILABLE.to_string(),
            Err(e) => {
                tracing::error!("Weekly insight failed: {}", e);
                INSIGHT_UNAVAILABLE.to_string()
            }
        }
    }
}
