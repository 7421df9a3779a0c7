use std::sync::Arc;

use an_core::{NewsConfig, SummaryTransport};

pub mod fallback;
pub mod insight;
pub mod models;
pub mod summarizer;

pub use fallback::fallback_summarize;
pub use insight::InsightGenerator;
pub use models::{HuggingFaceTransport, OfflineTransport};
pub use summarizer::Summarizer;

/// Picks the transport for this run. Offline runs only ever use the fallback.
pub fn create_transport(config: &NewsConfig, offline: bool) -> Arc<dyn SummaryTransport> {
    if offline {
        Arc::new(OfflineTransport)
    } else {
        Arc::new(HuggingFaceTransport::new(
            config.summary_api_url.clone(),
            config.summary_credential.clone(),
        ))
    }
}

pub mod prelude {
    pub use super::create_transport;
    pub use super::{fallback_summarize, InsightGenerator, Summarizer};
    pub use an_core::{Article, Error, Result, SummaryTransport};
}
