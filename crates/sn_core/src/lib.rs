pub mod error;
pub mod types;

pub use error::Error;
pub use types::{
    Article, ComparativeSentiment, CoverageDifference, Report, Sentiment, SentimentDistribution,
    TopicOverlap,
};

pub type Result<T> = std::result::Result<T, Error>;
