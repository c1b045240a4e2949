use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::models::Article;

/// Built-in keyword patterns. Matching is a logical OR, so the order here
/// carries no meaning.
pub const KEYWORDS_DEFAULT: &[&str] = &[
    // destination
    r"hong\s*kong",
    r"\bhkg\b",
    r"\bhk\b",
    "香港",
    r"\bkowloon\b",
    r"\btsim\s*sha\s*tsui\b",
    // nearby / route keywords
    "macau",
    r"\bmfm\b",
    "澳门",
    "guangzhou",
    r"\bcan\b",
    "广州",
    // origin
    "chengdu",
    r"\bctu\b",
    "成都",
];

/// Compile the built-in keywords plus any user-supplied patterns, all
/// case-insensitive. Happens eagerly at startup so a bad pattern fails the
/// run before anything touches blogwatcher.
pub fn compile_patterns(extra: &[String]) -> Result<Vec<Regex>> {
    KEYWORDS_DEFAULT
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("Invalid keyword pattern: {pattern}"))
        })
        .collect()
}

fn haystack(article: &Article) -> String {
    format!(
        "{}\n{}\n{}",
        article.title,
        article.blog.as_deref().unwrap_or(""),
        article.url.as_deref().unwrap_or("")
    )
}

/// Keep the articles where any pattern hits the title, blog or url,
/// preserving input order. The caller applies the `--max` cap.
pub fn filter_matches(articles: Vec<Article>, patterns: &[Regex]) -> Vec<Article> {
    articles
        .into_iter()
        .filter(|article| {
            let hay = haystack(article);
            patterns.iter().any(|p| p.is_match(&hay))
        })
        .collect()
}
