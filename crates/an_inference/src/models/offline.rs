use an_core::{Error, Result, SummaryTransport};

/// Transport that never reaches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineTransport;

#[async_trait::async_trait]
impl SummaryTransport for OfflineTransport {
    fn name(&self) -> &str {
        "offline"
    }

    async fn summarize(&self, _input: &str) -> Result<Option<String>> {
        Err(Error::Inference("summarization service disabled (offline)".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_always_fails() {
        let result = OfflineTransport.summarize("Some text.").await;
        assert!(matches!(result, Err(Error::Inference(_))));
    }
}
