use async_trait::async_trait;
use crate::Result;

/// Remote text-in, short-text-out summarization service.
#[async_trait]
pub trait SummaryTransport: Send + Sync {
    /// Short human readable name used in logs.
    fn name(&self) -> &str;

    /// Sends `input` to the service.
    ///
    /// `Ok(None)` means the call went through but the response carried no
    /// usable summary field.
    async fn summarize(&self, input: &str) -> Result<Option<String>>;
}
