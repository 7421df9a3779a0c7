use std::sync::Arc;

use an_core::{Article, NewsConfig};
use an_feeds::Aggregator;
use an_inference::{InsightGenerator, Summarizer};
use futures::stream::{self, StreamExt};

use crate::markup;
use crate::surface::RenderSurface;

pub const TOP_NEWS_COUNT: usize = 3;
pub const FULL_NEWS_COUNT: usize = 20;

pub const UNABLE_TO_LOAD: &str = "Unable to load news.";

/// The two article-list widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsWidget {
    /// Homepage block with the three latest articles.
    TopNews,
    /// News page listing the twenty latest articles.
    FullNews,
}

impl NewsWidget {
    pub fn limit(&self) -> usize {
        match self {
            NewsWidget::TopNews => TOP_NEWS_COUNT,
            NewsWidget::FullNews => FULL_NEWS_COUNT,
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            NewsWidget::TopNews => "Loading latest AI & Data Engineering news...",
            NewsWidget::FullNews => "Loading full AI & Data Engineering feed...",
        }
    }
}

pub struct NewsRenderer {
    aggregator: Arc<Aggregator>,
    summarizer: Summarizer,
    insight: InsightGenerator,
    insight_heading: String,
    summary_concurrency: usize,
}

impl NewsRenderer {
    pub fn new(
        config: &NewsConfig,
        aggregator: Arc<Aggregator>,
        summarizer: Summarizer,
        insight: InsightGenerator,
    ) -> Self {
        Self {
            aggregator,
            summarizer,
            insight,
            insight_heading: config.insight_heading.clone(),
            summary_concurrency: config.summary_concurrency.max(1),
        }
    }

    pub async fn render_top_news(&self, surface: &mut dyn RenderSurface, container_id: &str) {
        self.render(surface, container_id, NewsWidget::TopNews).await
    }

    pub async fn render_full_news(&self, surface: &mut dyn RenderSurface, container_id: &str) {
        self.render(surface, container_id, NewsWidget::FullNews).await
    }

    /// Fills `container_id` with one card per article, in article order.
    ///
    /// An unknown container makes this a no-op.
    pub async fn render(&self, surface: &mut dyn RenderSurface, container_id: &str, widget: NewsWidget) {
        let Some(container) = surface.element_by_id(container_id) else {
            tracing::debug!("Container #{} not found, skipping {:?}", container_id, widget);
            return;
        };
        container.set_inner_html(markup::status_message(widget.loading_message()));

        let articles: Vec<Article> = self
            .aggregator
            .fetch_all_articles()
            .await
            .into_iter()
            .take(widget.limit())
            .collect();

        if articles.is_empty() && widget == NewsWidget::FullNews {
            container.set_inner_html(markup::status_message(UNABLE_TO_LOAD));
            return;
        }

        container.set_inner_html(String::new());

        // `buffered` yields in input order, so cards always follow article order.
        let cards = stream::iter(articles.iter())
            .map(|article| async move {
                let summary = self.summarizer.summarize_article(article).await;
                markup::news_card(article, &summary)
            })
            .buffered(self.summary_concurrency);
        futures::pin_mut!(cards);

        while let Some(card) = cards.next().await {
            container.append_child(card);
        }
        tracing::info!("🖼️ Rendered {} cards into #{}", articles.len(), container_id);
    }

    /// Writes a single-paragraph digest of the latest articles.
    pub async fn render_weekly_insight(&self, surface: &mut dyn RenderSurface, container_id: &str) {
        let Some(container) = surface.element_by_id(container_id) else {
            tracing::debug!("Container #{} not found, skipping weekly insight", container_id);
            return;
        };

        let articles = self.aggregator.fetch_all_articles().await;
        let insight = self.insight.generate(&articles).await;
        container.set_inner_html(markup::insight_block(&self.insight_heading, &insight));
    }
}
