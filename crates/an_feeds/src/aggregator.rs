use std::sync::Arc;

use an_core::types::sort_by_date_desc;
use an_core::{Article, NewsConfig};
use an_storage::cache::ARTICLES_KEY;
use an_storage::Cache;
use futures::stream::{self, StreamExt};

use crate::fetcher::FeedFetcher;
use crate::logging::Logger;

/// Collects every configured feed into one date-sorted, cached list.
pub struct Aggregator {
    fetcher: Arc<dyn FeedFetcher>,
    cache: Cache,
    feeds: Vec<String>,
    concurrency: usize,
}

impl Aggregator {
    pub fn new(config: &NewsConfig, fetcher: Arc<dyn FeedFetcher>, cache: Cache) -> Self {
        Self {
            fetcher,
            cache,
            feeds: config.feeds.clone(),
            concurrency: config.fetch_concurrency.max(1),
        }
    }

    /// Returns the cached list when fresh, otherwise fetches every feed.
    ///
    /// A failing feed contributes nothing; this never errors.
    pub async fn fetch_all_articles(&self) -> Vec<Article> {
        if let Some(cached) = self.cache.get::<Vec<Article>>(ARTICLES_KEY) {
            tracing::debug!("📦 Serving {} cached articles", cached.len());
            return cached;
        }

        tracing::info!("📡 Fetching {} feeds", self.feeds.len());
        // `buffered` keeps feed order no matter which request finishes first.
        let per_feed: Vec<Vec<Article>> = stream::iter(self.feeds.iter())
            .map(|feed| self.fetch_feed_articles(feed))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut articles: Vec<Article> = per_feed.into_iter().flatten().collect();
        sort_by_date_desc(&mut articles);
        tracing::info!("✨ Aggregated {} articles", articles.len());

        self.cache.set(ARTICLES_KEY, &articles);
        articles
    }

    async fn fetch_feed_articles(&self, feed: &str) -> Vec<Article> {
        let logger = Logger::new().with_prefix(format!("[{}]", feed));
        let result = match self.fetcher.fetch_feed(feed).await {
            Ok(response) => response.into_articles(),
            Err(e) => Err(e),
        };
        match result {
            Ok(articles) => {
                logger.debug(&format!("{} items", articles.len()));
                articles
            }
            Err(e) => {
                logger.error(&format!("RSS error: {}", e));
                Vec::new()
            }
        }
    }
}
