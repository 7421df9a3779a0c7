use std::sync::Arc;

use an_core::{Article, Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// One item as returned by the RSS-to-JSON proxy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "pubDate")]
    pub pub_date: Option<String>,
}

impl From<FeedItem> for Article {
    fn from(item: FeedItem) -> Self {
        Article {
            title: item.title.unwrap_or_default(),
            link: item.link.unwrap_or_default(),
            description: item.description.unwrap_or_default(),
            pub_date: item.pub_date.unwrap_or_default(),
        }
    }
}

/// Top-level proxy response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<FeedItem>>,
}

impl FeedResponse {
    /// Normalizes the items, keeping the feed's own order.
    pub fn into_articles(self) -> Result<Vec<Article>> {
        if self.status.as_deref() == Some("error") {
            return Err(Error::Feed(
                self.message.unwrap_or_else(|| "proxy reported an error".to_string()),
            ));
        }
        let items = self
            .items
            .ok_or_else(|| Error::Feed("response has no items field".to_string()))?;
        Ok(items.into_iter().map(Article::from).collect())
    }
}

/// Retrieves one feed, already converted to JSON.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch_feed(&self, feed_url: &str) -> Result<FeedResponse>;
}

/// Fetches feeds through an rss2json-compatible endpoint.
#[derive(Debug, Clone)]
pub struct Rss2JsonFetcher {
    client: Arc<Client>,
    proxy_url: String,
}

impl Rss2JsonFetcher {
    pub fn new(proxy_url: impl Into<String>) -> Self {
        Self::with_client(Arc::new(Client::new()), proxy_url)
    }

    pub fn with_client(client: Arc<Client>, proxy_url: impl Into<String>) -> Self {
        Self {
            client,
            proxy_url: proxy_url.into(),
        }
    }

    /// Proxy URL with the feed passed, encoded, as `rss_url`.
    pub fn request_url(&self, feed_url: &str) -> Result<Url> {
        Ok(Url::parse_with_params(&self.proxy_url, &[("rss_url", feed_url)])?)
    }
}

#[async_trait]
impl FeedFetcher for Rss2JsonFetcher {
    async fn fetch_feed(&self, feed_url: &str) -> Result<FeedResponse> {
        let url = self.request_url(feed_url)?;
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<FeedResponse>()
            .await?;
        Ok(response)
    }
}
