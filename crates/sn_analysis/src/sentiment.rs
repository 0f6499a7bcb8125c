use sn_core::Sentiment;

const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

pub trait SentimentScorer: Send + Sync {
    /// Returns a compound polarity score in [-1, 1]
    fn compound_score(&self, text: &str) -> f64;
}

/// Lexicon-based scorer backed by the VADER algorithm.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn compound_score(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }
}

/// Classifies one article from its title and summary.
///
/// The scored text is `"{title}. {summary}"`; scores of at least 0.05 are
/// Positive, at most -0.05 Negative, anything between Neutral.
pub fn classify(scorer: &dyn SentimentScorer, title: &str, summary: &str) -> Sentiment {
    let text = format!("{}. {}", title, summary);
    let score = scorer.compound_score(&text);

    if score >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
