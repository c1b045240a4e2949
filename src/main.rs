mod app;
mod blogwatcher;
mod config;
mod logger;
mod matcher;
mod models;
mod parser;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "hk-deals")]
#[command(about = "Hong Kong travel-deal alerts from blogwatcher")]
struct Cli {
    /// Add a case-insensitive regex keyword (repeatable)
    #[arg(long = "keywords", value_name = "PATTERN")]
    keywords: Vec<String>,

    /// Do not mark matched articles as read
    #[arg(long)]
    no_mark_read: bool,

    /// Max number of matched items to include in the alert
    #[arg(long, default_value_t = 10)]
    max: usize,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let code = app::run(cli.keywords, cli.no_mark_read, cli.max).await?;
    Ok(ExitCode::from(code))
}
