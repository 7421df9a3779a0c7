use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use an_core::config::DEFAULT_CACHE_TTL;
use an_core::NewsConfig;
use an_feeds::{Aggregator, Rss2JsonFetcher};
use an_inference::{create_transport, InsightGenerator, Summarizer};
use an_render::{Document, NewsRenderer, NewsWidget};
use an_storage::Cache;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                let unit = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    'd' => 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = num
                    .checked_mul(unit)
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(|| format!("Duration too large: {}", s))?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A trailing bare number counts as seconds
        if !current_number.is_empty() {
            let num = current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            total_seconds = total_seconds
                .checked_add(num)
                .ok_or_else(|| format!("Duration too large: {}", s))?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "AI news aggregator and summarizer", long_about = None)]
struct Cli {
    /// Cache backend: memory or file
    #[arg(long, default_value = "file")]
    storage: String,
    /// Directory used by the file cache
    #[arg(long)]
    cache_dir: Option<PathBuf>,
    /// Feed URL to aggregate; repeat for several. Defaults to the built-in AI feeds.
    #[arg(long = "feed")]
    feeds: Vec<String>,
    /// Bearer token for the summarization service
    #[arg(long)]
    token: Option<String>,
    /// Cache time-to-live (e.g. 24h, 30m, 1h15m)
    #[arg(long)]
    ttl: Option<HumanDuration>,
    /// Feeds fetched and summaries requested at once
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
    /// Never call the summarization service; use the local fallback only
    #[arg(long)]
    offline: bool,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List aggregated articles, newest first
    Fetch {
        #[arg(long)]
        limit: Option<usize>,
        /// Print the articles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize a piece of text
    Summarize { text: String },
    /// Render a widget and print the resulting HTML
    Render {
        #[arg(value_enum)]
        widget: WidgetArg,
        /// Container id to render into
        #[arg(long)]
        container: Option<String>,
        /// Write the HTML to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum WidgetArg {
    Top,
    Full,
    Insight,
}

impl WidgetArg {
    fn default_container(&self) -> &'static str {
        match self {
            WidgetArg::Top => "top-news",
            WidgetArg::Full => "news-list",
            WidgetArg::Insight => "weekly-insight",
        }
    }
}

fn build_config(cli: &Cli) -> NewsConfig {
    let mut config = NewsConfig::default()
        .with_credential(cli.token.clone())
        .with_cache_ttl(cli.ttl.map(|t| t.0).unwrap_or(DEFAULT_CACHE_TTL))
        .with_concurrency(cli.concurrency);
    if !cli.feeds.is_empty() {
        config = config.with_feeds(cli.feeds.clone());
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    an_feeds::logging::init_logging(cli.verbose);

    let config = build_config(&cli);
    let store = an_storage::create_store(&cli.storage, cli.cache_dir.as_deref())
        .context("failed to open cache storage")?;
    let cache = Cache::new(store, config.cache_ttl);
    info!("💾 Cache ready (using {}, ttl {}s)", cli.storage, config.cache_ttl.as_secs());

    let transport = create_transport(&config, cli.offline);
    info!("🧠 Summarizer transport: {}", transport.name());

    let fetcher = Arc::new(Rss2JsonFetcher::new(config.rss_proxy_url.clone()));
    let aggregator = Arc::new(Aggregator::new(&config, fetcher, cache.clone()));
    let summarizer = Summarizer::new(transport.clone(), cache);

    match cli.command {
        Commands::Fetch { limit, json } => {
            let articles = aggregator.fetch_all_articles().await;
            let shown = &articles[..limit.unwrap_or(articles.len()).min(articles.len())];
            if json {
                println!("{}", serde_json::to_string_pretty(shown)?);
            } else {
                println!("Found {} articles", articles.len());
                for article in shown {
                    println!("- [{}] {} ({})", article.pub_date, article.title, article.link);
                }
            }
        }
        Commands::Summarize { text } => {
            println!("{}", summarizer.summarize(&text).await);
        }
        Commands::Render { widget, container, output } => {
            let container = container.unwrap_or_else(|| widget.default_container().to_string());
            let insight = InsightGenerator::new(&config, transport);
            let renderer = NewsRenderer::new(&config, aggregator, summarizer, insight);

            let mut document = Document::new().with_container(container.as_str());
            match widget {
                WidgetArg::Top => renderer.render(&mut document, &container, NewsWidget::TopNews).await,
                WidgetArg::Full => renderer.render(&mut document, &container, NewsWidget::FullNews).await,
                WidgetArg::Insight => renderer.render_weekly_insight(&mut document, &container).await,
            }

            let html = document.to_html();
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!("📝 Wrote {}", path.display());
                }
                None => println!("{}", html),
            }
        }
    }

    Ok(())
}
