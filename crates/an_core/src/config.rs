use std::time::Duration;

pub const DEFAULT_FEEDS: &[&str] = &[
    "https://blog.google/technology/ai/rss/",
    "https://openai.com/blog/rss/",
    "https://huggingface.co/blog/feed.xml",
    "https://databricks.com/feed",
    "https://techcrunch.com/tag/artificial-intelligence/feed/",
    "https://learn.microsoft.com/en-us/fabric/rss.xml",
];

pub const DEFAULT_RSS_PROXY_URL: &str = "https://api.rss2json.com/v1/api.json";

pub const DEFAULT_SUMMARY_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub const DEFAULT_INSIGHT_PROMPT: &str = "Summarise the key themes in this week's AI and data engineering news in 3-4 sentences, and end with one forward-looking insight.";

pub const DEFAULT_INSIGHT_HEADING: &str = "Weekly Insight";

/// Everything the pipeline needs, built once at startup.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub feeds: Vec<String>,
    pub rss_proxy_url: String,
    pub summary_api_url: String,
    pub summary_credential: Option<String>,
    pub cache_ttl: Duration,
    /// Number of feeds fetched at once. 1 keeps the fetches strictly sequential.
    pub fetch_concurrency: usize,
    /// Number of summaries requested at once while rendering.
    pub summary_concurrency: usize,
    pub insight_prompt: String,
    pub insight_heading: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect(),
            rss_proxy_url: DEFAULT_RSS_PROXY_URL.to_string(),
            summary_api_url: DEFAULT_SUMMARY_API_URL.to_string(),
            summary_credential: None,
            cache_ttl: DEFAULT_CACHE_TTL,
            fetch_concurrency: 1,
            summary_concurrency: 1,
            insight_prompt: DEFAULT_INSIGHT_PROMPT.to_string(),
            insight_heading: DEFAULT_INSIGHT_HEADING.to_string(),
        }
    }
}

impl NewsConfig {
    pub fn with_feeds(mut self, feeds: Vec<String>) -> Self {
        self.feeds = feeds;
        self
    }

    /// Blank credentials are treated as absent.
    pub fn with_credential(mut self, credential: Option<String>) -> Self {
        self.summary_credential = credential.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        let concurrency = concurrency.max(1);
        self.fetch_concurrency = concurrency;
        self.summary_concurrency = concurrency;
        self
    }
}
