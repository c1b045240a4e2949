use regex::Regex;

use crate::models::Article;

/// Parse the text that `blogwatcher articles` prints into article records.
///
/// Each record starts with a header like `[12] [new] Some title` and may be
/// followed by indented `Blog:` / `URL:` / `Published:` lines. Anything else
/// (including metadata before the first header) is skipped. Never fails:
/// input that matches nothing just yields no records.
pub fn parse_articles(text: &str) -> Vec<Article> {
    let header_re = Regex::new(r"^\s*\[(\d+)\]\s*\[new\]\s*(.*)$").unwrap();

    let mut out: Vec<Article> = Vec::new();
    let mut cur: Option<Article> = None;

    for line in text.lines() {
        if let Some(caps) = header_re.captures(line) {
            // An id too large for u64 means this isn't one of our headers.
            if let Ok(id) = caps[1].parse::<u64>() {
                if let Some(done) = cur.take() {
                    out.push(done);
                }
                cur = Some(Article {
                    id,
                    title: caps[2].trim().to_string(),
                    blog: None,
                    url: None,
                    published: None,
                });
                continue;
            }
        }

        let Some(article) = cur.as_mut() else {
            continue;
        };

        let s = line.trim();
        if let Some(rest) = s.strip_prefix("Blog:") {
            article.blog = Some(rest.trim().to_string());
        } else if let Some(rest) = s.strip_prefix("URL:") {
            article.url = Some(rest.trim().to_string());
        } else if let Some(rest) = s.strip_prefix("Published:") {
            article.published = Some(rest.trim().to_string());
        }
    }

    if let Some(done) = cur.take() {
        out.push(done);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_records_with_metadata() {
        let text = "\
[5] [new] The Flight Deal: HKG cheap fares
Blog: The Flight Deal
URL: http://example.com/5
Published: 2024-01-01
[6] [new] Unrelated post about Paris
Blog: Travel-Dealz
";
        let articles = parse_articles(text);
        assert_eq!(articles.len(), 2);

        assert_eq!(
            articles[0],
            Article {
                id: 5,
                title: "The Flight Deal: HKG cheap fares".to_string(),
                blog: Some("The Flight Deal".to_string()),
                url: Some("http://example.com/5".to_string()),
                published: Some("2024-01-01".to_string()),
            }
        );

        assert_eq!(articles[1].id, 6);
        assert_eq!(articles[1].blog.as_deref(), Some("Travel-Dealz"));
        assert_eq!(articles[1].url, None);
        assert_eq!(articles[1].published, None);
    }

    #[test]
    fn test_indented_header_and_metadata() {
        let text = "  [7] [new]   Spaced out title  \n    Blog:   Somewhere   \n";
        let articles = parse_articles(text);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Spaced out title");
        assert_eq!(articles[0].blog.as_deref(), Some("Somewhere"));
    }

    #[test]
    fn test_metadata_before_first_header_is_ignored() {
        let text = "Blog: Orphan\nURL: http://nowhere\n[1] [new] Real one\n";
        let articles = parse_articles(text);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, 1);
        assert_eq!(articles[0].blog, None);
        assert_eq!(articles[0].url, None);
    }

    #[test]
    fn test_junk_lines_are_skipped() {
        let text = "\
3 unread articles
[2] [new] Title here
some free text the tool printed
Blog: A Blog
[old] [3] not a header
[4][new] tight brackets
";
        // `[4][new]` still matches: the whitespace between brackets is optional.
        let articles = parse_articles(text);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, 2);
        assert_eq!(articles[0].blog.as_deref(), Some("A Blog"));
        assert_eq!(articles[1].id, 4);
    }

    #[test]
    fn test_last_record_finalized_at_eof() {
        let articles = parse_articles("[9] [new] No trailing newline");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, 9);
        assert_eq!(articles[0].title, "No trailing newline");
    }

    #[test]
    fn test_overflowing_id_is_not_a_record() {
        let text = "[99999999999999999999999999] [new] Too big\n[8] [new] Fine\n";
        let articles = parse_articles(text);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, 8);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_articles("").is_empty());
    }
}
