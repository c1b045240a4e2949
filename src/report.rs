use crate::models::Article;

/// Header line of the alert. Downstream relays key off this text, so it is
/// part of the output contract.
pub const ALERT_HEADER: &str = "香港机票/酒店情报：发现可能相关的新优惠/文章（来自监控源）";

/// Render the whole alert as one string so nothing is printed until the
/// full matched list is known.
pub fn format_alert(matched: &[Article]) -> String {
    let mut out = String::new();
    if matched.is_empty() {
        return out;
    }

    out.push_str(ALERT_HEADER);
    out.push('\n');

    for article in matched {
        let mut meta: Vec<&str> = Vec::new();
        if let Some(blog) = &article.blog {
            meta.push(blog);
        }
        if let Some(published) = &article.published {
            meta.push(published);
        }

        if meta.is_empty() {
            out.push_str(&format!("- {}\n", article.title));
        } else {
            out.push_str(&format!("- {}（{}）\n", article.title, meta.join(" · ")));
        }

        if let Some(url) = &article.url {
            out.push_str(&format!("  {url}\n"));
        }
    }

    out
}
