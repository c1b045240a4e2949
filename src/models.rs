/// One unread article as reported by blogwatcher. Built per run from the
/// `articles` listing and discarded at exit; the id is only meaningful
/// within the batch it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub blog: Option<String>,
    pub url: Option<String>,
    pub published: Option<String>,
}
