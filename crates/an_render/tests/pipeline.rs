use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use an_core::{Error, NewsConfig, Result, SummaryTransport};
use an_feeds::{Aggregator, FeedFetcher, FeedItem, FeedResponse};
use an_inference::{InsightGenerator, Summarizer};
use an_render::{Container, Document, NewsRenderer, RenderSurface};
use an_storage::{Cache, MemoryStore};
use async_trait::async_trait;

struct StaticFetcher {
    items: Option<Vec<FeedItem>>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    fn with_articles(count: usize) -> Arc<Self> {
        let items = (1..=count)
            .map(|day| FeedItem {
                title: Some(format!("Story {}", day)),
                link: Some(format!("https://news.example.com/{}", day)),
                description: Some(format!("<p>Story {} happened. Details follow. More.</p>", day)),
                pub_date: Some(format!("2024-01-{:02} 09:00:00", day)),
            })
            .collect();
        Arc::new(Self { items: Some(items), calls: AtomicUsize::new(0) })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self { items: None, calls: AtomicUsize::new(0) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedFetcher for StaticFetcher {
    async fn fetch_feed(&self, _feed_url: &str) -> Result<FeedResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.items {
            Some(items) => Ok(FeedResponse {
                status: Some("ok".to_string()),
                message: None,
                items: Some(items.clone()),
            }),
            None => Err(Error::Feed("503 Service Unavailable".to_string())),
        }
    }
}

struct TestTransport {
    fail: bool,
    /// Sleeps longer for earlier inputs so completion order is reversed.
    staggered: bool,
    inputs: Mutex<Vec<String>>,
}

impl TestTransport {
    fn new(fail: bool, staggered: bool) -> Arc<Self> {
        Arc::new(Self { fail, staggered, inputs: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl SummaryTransport for TestTransport {
    fn name(&self) -> &str {
        "test"
    }

    async fn summarize(&self, input: &str) -> Result<Option<String>> {
        self.inputs.lock().unwrap().push(input.to_string());
        if self.staggered {
            let day: u64 = input
                .trim_start_matches("<p>Story ")
                .split(' ')
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(day * 10)).await;
        }
        if self.fail {
            return Err(Error::Inference("timeout".to_string()));
        }
        Ok(Some(format!("Remote summary #{}", self.inputs.lock().unwrap().len())))
    }
}

fn renderer(config: &NewsConfig, fetcher: Arc<StaticFetcher>, transport: Arc<TestTransport>) -> NewsRenderer {
    let cache = Cache::new(Arc::new(MemoryStore::new()), config.cache_ttl);
    let aggregator = Arc::new(Aggregator::new(config, fetcher, cache.clone()));
    let summarizer = Summarizer::new(transport.clone(), cache);
    let insight = InsightGenerator::new(config, transport);
    NewsRenderer::new(config, aggregator, summarizer, insight)
}

fn one_feed() -> NewsConfig {
    NewsConfig::default().with_feeds(vec!["https://feeds.example.com/ai".to_string()])
}

/// Surface that remembers every full-content write.
#[derive(Default)]
struct RecordingContainer {
    html: String,
    writes: Vec<String>,
}

impl Container for RecordingContainer {
    fn inner_html(&self) -> &str {
        &self.html
    }

    fn set_inner_html(&mut self, html: String) {
        self.writes.push(html.clone());
        self.html = html;
    }

    fn append_child(&mut self, html: String) {
        self.html.push_str(&html);
    }
}

struct RecordingSurface {
    container: RecordingContainer,
}

impl RenderSurface for RecordingSurface {
    fn element_by_id(&mut self, id: &str) -> Option<&mut dyn Container> {
        (id == "news").then_some(&mut self.container as &mut dyn Container)
    }
}

fn card_titles(html: &str) -> Vec<String> {
    html.split("<h3>")
        .skip(1)
        .filter_map(|rest| rest.split("</h3>").next())
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn top_news_renders_three_latest_cards() {
    let config = one_feed();
    let renderer = renderer(&config, StaticFetcher::with_articles(5), TestTransport::new(false, false));
    let mut doc = Document::new().with_container("top-news");

    renderer.render_top_news(&mut doc, "top-news").await;

    let html = doc.element("top-news").unwrap().inner_html().to_string();
    assert_eq!(card_titles(&html), vec!["Story 5", "Story 4", "Story 3"]);
    assert_eq!(html.matches("news-card").count(), 3);
    assert!(html.contains("Remote summary #1"));
    assert!(html.contains("href=\"https://news.example.com/5\""));
    assert!(html.contains("Jan 5, 2024 09:00 UTC"));
}

#[tokio::test]
async fn full_news_is_capped_at_twenty() {
    let config = one_feed();
    let renderer = renderer(&config, StaticFetcher::with_articles(25), TestTransport::new(false, false));
    let mut doc = Document::new().with_container("news-list");

    renderer.render_full_news(&mut doc, "news-list").await;

    let titles = card_titles(doc.element("news-list").unwrap().inner_html());
    assert_eq!(titles.len(), 20);
    assert_eq!(titles.first().map(String::as_str), Some("Story 25"));
    assert_eq!(titles.last().map(String::as_str), Some("Story 6"));
}

#[tokio::test]
async fn loading_placeholder_is_written_first() {
    let config = one_feed();
    let renderer = renderer(&config, StaticFetcher::with_articles(2), TestTransport::new(false, false));
    let mut surface = RecordingSurface { container: RecordingContainer::default() };

    renderer.render_top_news(&mut surface, "news").await;

    let writes = &surface.container.writes;
    assert!(writes[0].contains("Loading latest AI &amp; Data Engineering news..."));
    assert_eq!(card_titles(surface.container.inner_html()), vec!["Story 2", "Story 1"]);
}

#[tokio::test]
async fn missing_container_is_a_no_op() {
    let config = one_feed();
    let fetcher = StaticFetcher::with_articles(3);
    let renderer = renderer(&config, fetcher.clone(), TestTransport::new(false, false));
    let mut doc = Document::new().with_container("top-news");

    renderer.render_top_news(&mut doc, "does-not-exist").await;
    renderer.render_weekly_insight(&mut doc, "does-not-exist").await;

    assert_eq!(doc.to_html(), "<div id=\"top-news\"></div>");
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn failing_feeds_show_placeholder() {
    let config = one_feed();
    let renderer = renderer(&config, StaticFetcher::failing(), TestTransport::new(false, false));
    let mut doc = Document::new().with_container("news-list");

    renderer.render_full_news(&mut doc, "news-list").await;

    let html = doc.element("news-list").unwrap().inner_html();
    assert!(html.contains("Unable to load news."));
    assert!(!html.contains("news-card"));
}

#[tokio::test]
async fn failing_feeds_leave_top_news_empty() {
    let config = one_feed();
    let renderer = renderer(&config, StaticFetcher::failing(), TestTransport::new(false, false));
    let mut doc = Document::new().with_container("top-news");

    renderer.render_top_news(&mut doc, "top-news").await;

    assert_eq!(doc.element("top-news").unwrap().inner_html(), "");
}

#[tokio::test]
async fn summary_failures_fall_back_per_card() {
    let config = one_feed();
    let renderer = renderer(&config, StaticFetcher::with_articles(3), TestTransport::new(true, false));
    let mut doc = Document::new().with_container("top-news");

    renderer.render_top_news(&mut doc, "top-news").await;

    let html = doc.element("top-news").unwrap().inner_html();
    assert!(html.contains("<p>Story 3 happened. Details follow.</p>"));
    assert_eq!(html.matches("news-card").count(), 3);
}

#[tokio::test]
async fn concurrent_summaries_keep_article_order() {
    let config = one_feed().with_concurrency(3);
    let renderer = renderer(&config, StaticFetcher::with_articles(3), TestTransport::new(false, true));
    let mut doc = Document::new().with_container("top-news");

    renderer.render_top_news(&mut doc, "top-news").await;

    let titles = card_titles(doc.element("top-news").unwrap().inner_html());
    assert_eq!(titles, vec!["Story 3", "Story 2", "Story 1"]);
}

#[tokio::test]
async fn weekly_insight_writes_heading_and_paragraph() {
    let config = one_feed();
    let transport = TestTransport::new(false, false);
    let renderer = renderer(&config, StaticFetcher::with_articles(12), transport.clone());
    let mut doc = Document::new().with_container("weekly-insight");

    renderer.render_weekly_insight(&mut doc, "weekly-insight").await;

    assert_eq!(
        doc.element("weekly-insight").unwrap().inner_html(),
        "<h3>Weekly Insight</h3><p>Remote summary #1</p>"
    );
    let inputs = transport.inputs.lock().unwrap();
    assert_eq!(inputs.len(), 1);
    assert!(inputs[0].starts_with(&config.insight_prompt));
    assert!(inputs[0].contains("Story 12. <p>Story 12 happened."));
    assert!(!inputs[0].contains("Story 2."));
}

#[tokio::test]
async fn weekly_insight_failure_shows_unavailable() {
    let config = one_feed();
    let renderer = renderer(&config, StaticFetcher::with_articles(4), TestTransport::new(true, false));
    let mut doc = Document::new().with_container("weekly-insight");

    renderer.render_weekly_insight(&mut doc, "weekly-insight").await;

    assert!(doc
        .element("weekly-insight")
        .unwrap()
        .inner_html()
        .contains("<p>Insight unavailable.</p>"));
}

#[tokio::test]
async fn widgets_share_one_fetch_through_the_cache() {
    let config = one_feed();
    let fetcher = StaticFetcher::with_articles(4);
    let renderer = renderer(&config, fetcher.clone(), TestTransport::new(false, false));
    let mut doc = Document::new().with_container("top-news").with_container("weekly-insight");

    renderer.render_top_news(&mut doc, "top-news").await;
    renderer.render_weekly_insight(&mut doc, "weekly-insight").await;

    assert_eq!(fetcher.calls(), 1);
}
