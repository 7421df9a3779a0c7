pub mod aggregator;
pub mod fetcher;
pub mod logging;

pub use aggregator::Aggregator;
pub use fetcher::{FeedFetcher, FeedItem, FeedResponse, Rss2JsonFetcher};

pub mod prelude {
    pub use super::aggregator::Aggregator;
    pub use super::fetcher::FeedFetcher;
    pub use an_core::{Article, Error, Result};
}
