use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentiment label assigned to a single article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One scraped and classified news article. Immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Topics")]
    pub topics: Vec<String>,
    #[serde(rename = "Link")]
    pub link: String,
}

/// Count of articles per sentiment label for one request.
///
/// The counts always sum to the number of articles processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive")]
    pub positive: u32,
    #[serde(rename = "Negative")]
    pub negative: u32,
    #[serde(rename = "Neutral")]
    pub neutral: u32,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}

/// Narrative contrast between two articles' sentiment stance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDifference {
    #[serde(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Impact")]
    pub impact: String,
}

/// Shared vs. article-unique topic phrases across the retrieved set.
///
/// Unique topics are keyed by the article's 1-based ordinal label
/// ("Article 1", "Article 2", ...) in scrape order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicOverlap {
    #[serde(rename = "Common Topics")]
    pub common_topics: Vec<String>,
    #[serde(rename = "Unique Topics")]
    pub unique_topics: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparativeSentiment {
    #[serde(rename = "Sentiment Distribution")]
    pub distribution: SentimentDistribution,
    #[serde(rename = "Coverage Differences")]
    pub coverage_differences: Vec<CoverageDifference>,
    #[serde(rename = "Topic Overlap")]
    pub topic_overlap: TopicOverlap,
}

/// Full per-request report. Lives for a single request/response cycle.
///
/// The synthesized audio rides along in memory but is excluded from the
/// JSON body; the audio endpoint serves it as a raw MP3 stream instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<Article>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub comparative: ComparativeSentiment,
    #[serde(rename = "Final Sentiment Analysis")]
    pub final_sentiment: String,
    #[serde(skip)]
    pub audio: Vec<u8>,
}
