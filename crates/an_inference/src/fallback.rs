use an_core::SUMMARY_UNAVAILABLE;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKUP_TAG: Regex = Regex::new(r"<[^>]+>").expect("markup tag pattern is valid");
}

const FALLBACK_SENTENCES: usize = 2;

/// Network-free summary: the first two sentences of the text, tags removed.
pub fn fallback_summarize(text: &str) -> String {
    if text.is_empty() {
        return SUMMARY_UNAVAILABLE.to_string();
    }

    let stripped = MARKUP_TAG.replace_all(text, "");
    let sentences: Vec<&str> = stripped
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(FALLBACK_SENTENCES)
        .collect();

    if sentences.is_empty() {
        return SUMMARY_UNAVAILABLE.to_string();
    }
    sentences.join(". ") + "."
}
