use an_core::Article;
use url::Url;

/// Escapes text for element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only absolute http(s) links make it into an href.
pub fn safe_href(link: &str) -> String {
    match Url::parse(link.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => escape_html(link.trim()),
        _ => "#".to_string(),
    }
}

pub fn format_pub_date(article: &Article) -> String {
    match article.published_at() {
        Some(date) => date.format("%b %-d, %Y %H:%M UTC").to_string(),
        None => article.pub_date.clone(),
    }
}

pub fn status_message(text: &str) -> String {
    format!("<p class=\"news-status\" style=\"color:#ccc\">{}</p>", escape_html(text))
}

pub fn news_card(article: &Article, summary: &str) -> String {
    format!(
        concat!(
            "<div class=\"news-card neon-animate\">",
            "<h3>{title}</h3>",
            "<p>{summary}</p>",
            "<small style=\"color:#888;\">{date}</small><br/>",
            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">Read more →</a>",
            "</div>"
        ),
        title = escape_html(&article.title),
        summary = escape_html(summary),
        date = escape_html(&format_pub_date(article)),
        href = safe_href(&article.link),
    )
}

pub fn insight_block(heading: &str, insight: &str) -> String {
    format!(
        "<h3>{}</h3><p>{}</p>",
        escape_html(heading),
        escape_html(insight)
    )
}
