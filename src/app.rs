use anyhow::Result;
use log::{debug, info};
use regex::Regex;

use crate::blogwatcher::{ArticleMonitor, Blogwatcher, CommandError, DEFAULT_PROGRAM};
use crate::config::Config;
use crate::logger::init_logger;
use crate::matcher::{compile_patterns, filter_matches};
use crate::parser::parse_articles;
use crate::report::format_alert;

const INVENTORY_FAILED_EXIT: u8 = 2;

pub async fn run(extra_keywords: Vec<String>, no_mark_read: bool, max: usize) -> Result<u8> {
    // 0) Initialize logger
    init_logger()?;
    debug!("Logger initialized");

    // 1) Load optional config overrides
    let cfg = Config::load()?;
    debug!("Config loaded");

    // 2) Compile all keyword patterns up front so a bad one fails the run
    //    before any blogwatcher call
    let mut keywords = cfg.keywords.clone().unwrap_or_default();
    keywords.extend(extra_keywords);
    let patterns = compile_patterns(&keywords)?;
    debug!("Compiled {} keyword patterns", patterns.len());

    let blogs = cfg.blogs_to_scan();
    let monitor = Blogwatcher::new(cfg.blogwatcher_bin.as_deref().unwrap_or(DEFAULT_PROGRAM));

    Ok(run_pipeline(&monitor, &blogs, &patterns, no_mark_read, max).await)
}

/// The whole pipeline against any monitor implementation. Returns the
/// process exit code; every recoverable failure is handled in here.
async fn run_pipeline<M: ArticleMonitor>(
    monitor: &M,
    blogs: &[String],
    patterns: &[Regex],
    no_mark_read: bool,
    max: usize,
) -> u8 {
    // 3) Scan each source. One slow or broken blog must not hold up the
    //    rest, so failures only get a diagnostic line.
    for blog in blogs {
        match monitor.scan(blog).await {
            Ok(()) => debug!("Scanned blog: {}", blog),
            Err(CommandError::TimedOut(_)) => {
                println!("HK-DEALS: scan timeout for blog: {blog}");
            }
            Err(CommandError::Failed { output, .. }) => {
                println!("HK-DEALS: scan failed for blog: {blog}\n{output}");
            }
            Err(e) => {
                println!("HK-DEALS: scan failed for blog: {blog}\n{e}");
            }
        }
    }

    // 4) Fetch unread articles. Without the inventory there is nothing to
    //    report, so any failure here is fatal.
    let listing = match monitor.unread_articles().await {
        Ok(text) => text,
        Err(CommandError::Failed { output, .. }) => {
            println!("HK-DEALS: blogwatcher articles failed:\n{output}");
            return INVENTORY_FAILED_EXIT;
        }
        Err(e) => {
            println!("HK-DEALS: blogwatcher articles failed:\n{e}");
            return INVENTORY_FAILED_EXIT;
        }
    };

    // 5) Parse and filter
    let articles = parse_articles(&listing);
    if articles.is_empty() {
        info!("No unread articles, nothing to do");
        return 0;
    }
    debug!("Parsed {} unread articles", articles.len());

    let mut matched = filter_matches(articles, patterns);
    if matched.is_empty() {
        info!("No articles matched the keyword list");
        return 0;
    }

    // Articles beyond the cap stay unread and get another chance next run.
    matched.truncate(max);
    info!("Reporting {} matched articles", matched.len());

    // 6) Print the alert in one piece
    print!("{}", format_alert(&matched));

    // 7) Mark matched articles read, best-effort. The alert already went
    //    out; a failure here only risks a duplicate alert next run.
    if !no_mark_read {
        for article in &matched {
            if let Err(e) = monitor.mark_read(article.id).await {
                debug!("Failed to mark article {} read: {}", article.id, e);
            }
        }
    }

    0
}
