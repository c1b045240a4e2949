use std::process::Stdio;
use std::time::Duration;

use log::debug;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

/// Some feeds block bots and can hang, so scans get a short leash.
pub const SCAN_TIMEOUT: Duration = Duration::from_secs(25);
pub const ARTICLES_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

pub const DEFAULT_PROGRAM: &str = "blogwatcher";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command exited with status {code:?}")]
    Failed { code: Option<i32>, output: String },
    #[error("command timed out after {0:?}")]
    TimedOut(Duration),
    #[error("could not run command: {0}")]
    Io(#[from] std::io::Error),
}

/// Run a child process, capture stdout and stderr together, and wait up to
/// `limit` for it to finish. On timeout the child is killed via
/// `kill_on_drop`. No retries; callers decide what a failure means.
pub async fn run_command(
    program: &str,
    args: &[&str],
    limit: Duration,
) -> Result<String, CommandError> {
    debug!("Running {} {:?} (timeout {:?})", program, args, limit);

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let output = match timeout(limit, child.wait_with_output()).await {
        Ok(result) => result?,
        Err(_) => return Err(CommandError::TimedOut(limit)),
    };

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(CommandError::Failed {
            code: output.status.code(),
            output: text,
        });
    }

    Ok(text)
}

/// The three calls this program makes into the article-monitoring tool.
/// A trait so the pipeline can be exercised with a fake instead of a real
/// child process.
pub trait ArticleMonitor {
    async fn scan(&self, source: &str) -> Result<(), CommandError>;
    async fn unread_articles(&self) -> Result<String, CommandError>;
    async fn mark_read(&self, id: u64) -> Result<(), CommandError>;
}

/// The real monitor: shells out to the `blogwatcher` binary.
pub struct Blogwatcher {
    program: String,
}

impl Blogwatcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ArticleMonitor for Blogwatcher {
    async fn scan(&self, source: &str) -> Result<(), CommandError> {
        run_command(&self.program, &["scan", source], SCAN_TIMEOUT).await?;
        Ok(())
    }

    async fn unread_articles(&self) -> Result<String, CommandError> {
        run_command(&self.program, &["articles"], ARTICLES_TIMEOUT).await
    }

    async fn mark_read(&self, id: u64) -> Result<(), CommandError> {
        run_command(&self.program, &["read", &id.to_string()], DEFAULT_TIMEOUT).await?;
        Ok(())
    }
}
