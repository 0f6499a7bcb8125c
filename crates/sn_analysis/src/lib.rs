pub mod compare;
pub mod narrative;
pub mod sentiment;
pub mod topics;

pub use compare::{coverage_differences, topic_overlap, PairSelector, RandomPairSelector};
pub use narrative::final_sentiment_analysis;
pub use sentiment::{classify, SentimentScorer, VaderScorer};
pub use topics::{extract_topics, KeywordRanker, RakeRanker, MAX_TOPICS};
