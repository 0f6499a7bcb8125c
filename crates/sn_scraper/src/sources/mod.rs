use async_trait::async_trait;
use sn_core::Result;

pub mod times_of_india;

pub use times_of_india::TimesOfIndiaSource;

/// An article as it comes off the listing page, before any analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub link: String,
    pub summary: String,
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news source
    fn source(&self) -> &str;

    /// Returns the listing-page URL for a topic
    fn topic_url(&self, topic: &str) -> String;

    /// Fetches the raw listing page for a topic. One attempt, no retries.
    async fn fetch_topic_page(&self, topic: &str) -> Result<String>;

    /// Parses a listing page into at most `cap` article drafts
    fn extract_articles(&self, html: &str, cap: usize) -> Vec<ArticleDraft>;
}
