use std::sync::Arc;

use sn_analysis::{
    classify, coverage_differences, extract_topics, final_sentiment_analysis, topic_overlap,
    KeywordRanker, PairSelector, SentimentScorer, MAX_TOPICS,
};
use sn_core::{Article, ComparativeSentiment, Report, Result, SentimentDistribution};
use sn_scraper::NewsSource;
use sn_speech::{translate_or_fallback, SpeechSynthesizer, Translator};
use tracing::{info, warn};

use crate::config::PipelineConfig;

/// Sequences fetch, extraction, per-article analysis, aggregation,
/// localization, and speech synthesis into one report.
///
/// Every collaborator is injected once at construction; an invocation
/// owns all of its mutable state, so one pipeline can serve concurrent
/// requests. The stages of a single invocation run strictly in order.
pub struct NewsPipeline {
    source: Arc<dyn NewsSource>,
    scorer: Arc<dyn SentimentScorer>,
    ranker: Arc<dyn KeywordRanker>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    pair_selector: Arc<dyn PairSelector>,
    config: PipelineConfig,
}

impl NewsPipeline {
    pub fn new(
        source: Arc<dyn NewsSource>,
        scorer: Arc<dyn SentimentScorer>,
        ranker: Arc<dyn KeywordRanker>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        pair_selector: Arc<dyn PairSelector>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source,
            scorer,
            ranker,
            translator,
            synthesizer,
            pair_selector,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the full pipeline for one company.
    ///
    /// `Ok(None)` means the listing page could not be fetched; a fetched
    /// page always produces a full report, with however many articles
    /// survived extraction. Speech synthesis failure is fatal.
    pub async fn analyze(&self, company: &str, max_articles: usize) -> Result<Option<Report>> {
        let html = match self.source.fetch_topic_page(company).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to fetch news for '{}': {}", company, e);
                return Ok(None);
            }
        };

        let drafts = self.source.extract_articles(&html, max_articles);
        info!(
            "Extracted {} article(s) for '{}' from {}",
            drafts.len(),
            company,
            self.source.source()
        );

        let mut distribution = SentimentDistribution::default();
        let mut articles = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let sentiment = classify(self.scorer.as_ref(), &draft.title, &draft.summary);
            distribution.record(sentiment);

            let topics = extract_topics(
                self.ranker.as_ref(),
                &format!("{} {}", draft.title, draft.summary),
                MAX_TOPICS,
            );

            articles.push(Article {
                title: draft.title,
                summary: draft.summary,
                sentiment,
                topics,
                link: draft.link,
            });
        }

        let differences = coverage_differences(&articles, self.pair_selector.as_ref());
        let overlap = topic_overlap(&articles);
        let final_sentiment = final_sentiment_analysis(&distribution, company);

        let translated = translate_or_fallback(
            self.translator.as_ref(),
            &final_sentiment,
            &self.config.source_lang,
            &self.config.target_lang,
        )
        .await;

        let audio = self
            .synthesizer
            .synthesize(&translated, &self.config.target_lang)
            .await?;

        Ok(Some(Report {
            company: company.to_string(),
            articles,
            comparative: ComparativeSentiment {
                distribution,
                coverage_differences: differences,
                topic_overlap: overlap,
            },
            final_sentiment,
            audio,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sn_core::{Error, Sentiment};
    use sn_scraper::ArticleDraft;

    struct CannedSource(Vec<ArticleDraft>);

    #[async_trait]
    impl NewsSource for CannedSource {
        fn source(&self) -> &str {
            "canned"
        }

        fn topic_url(&self, topic: &str) -> String {
            format!("https://example.com/topic/{}", topic)
        }

        async fn fetch_topic_page(&self, _topic: &str) -> Result<String> {
            Ok("<html></html>".to_string())
        }

        fn extract_articles(&self, _html: &str, cap: usize) -> Vec<ArticleDraft> {
            self.0.iter().take(cap).cloned().collect()
        }
    }

    struct FailingSource;

    #[async_trait]
    impl NewsSource for FailingSource {
        fn source(&self) -> &str {
            "failing"
        }

        fn topic_url(&self, topic: &str) -> String {
            format!("https://example.com/topic/{}", topic)
        }

        async fn fetch_topic_page(&self, _topic: &str) -> Result<String> {
            Err(Error::Fetch("connection refused".to_string()))
        }

        fn extract_articles(&self, _html: &str, _cap: usize) -> Vec<ArticleDraft> {
            unreachable!("extraction must not run when the fetch fails")
        }
    }

    /// Scores by keyword so each canned article lands on a known label.
    struct KeywordScorer;

    impl SentimentScorer for KeywordScorer {
        fn compound_score(&self, text: &str) -> f64 {
            if text.contains("soars") {
                0.8
            } else if text.contains("sued") {
                -0.8
            } else {
                0.0
            }
        }
    }

    struct TitleWordsRanker;

    impl KeywordRanker for TitleWordsRanker {
        fn ranked_phrases(&self, text: &str) -> Vec<String> {
            vec![text.split('.').next().unwrap_or(text).to_lowercase()]
        }
    }

    struct OkTranslator;

    #[async_trait]
    impl Translator for OkTranslator {
        async fn translate(&self, text: &str, _source: &str, target: &str) -> Result<String> {
            Ok(format!("{}:{}", target, text))
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
            Err(Error::Translation("service unavailable".to_string()))
        }
    }

    /// Returns the synthesized text itself so tests can see what was spoken.
    struct EchoSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for EchoSynthesizer {
        async fn synthesize(&self, text: &str, _lang: &str) -> Result<Vec<u8>> {
            Ok(text.as_bytes().to_vec())
        }
    }

    struct FailingSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for FailingSynthesizer {
        async fn synthesize(&self, _text: &str, _lang: &str) -> Result<Vec<u8>> {
            Err(Error::Synthesis("service unavailable".to_string()))
        }
    }

    struct FixedPairSelector(usize, usize);

    impl PairSelector for FixedPairSelector {
        fn select_pair(&self, _count: usize) -> (usize, usize) {
            (self.0, self.1)
        }
    }

    fn drafts() -> Vec<ArticleDraft> {
        vec![
            ArticleDraft {
                title: "Acme soars".to_string(),
                link: "https://example.com/1".to_string(),
                summary: "Record quarter for the company".to_string(),
            },
            ArticleDraft {
                title: "Acme sued".to_string(),
                link: "https://example.com/2".to_string(),
                summary: "Regulator files a complaint".to_string(),
            },
            ArticleDraft {
                title: "Acme holds meeting".to_string(),
                link: "https://example.com/3".to_string(),
                summary: "Board convenes on schedule".to_string(),
            },
        ]
    }

    fn pipeline_with(
        source: Arc<dyn NewsSource>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> NewsPipeline {
        NewsPipeline::new(
            source,
            Arc::new(KeywordScorer),
            Arc::new(TitleWordsRanker),
            translator,
            synthesizer,
            Arc::new(FixedPairSelector(0, 1)),
            PipelineConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_mixed_sentiment_report() {
        let pipeline = pipeline_with(
            Arc::new(CannedSource(drafts())),
            Arc::new(OkTranslator),
            Arc::new(EchoSynthesizer),
        );

        let report = pipeline.analyze("Acme", 10).await.unwrap().unwrap();

        assert_eq!(report.company, "Acme");
        assert_eq!(report.articles.len(), 3);
        assert_eq!(report.articles[0].sentiment, Sentiment::Positive);
        assert_eq!(report.articles[1].sentiment, Sentiment::Negative);
        assert_eq!(report.articles[2].sentiment, Sentiment::Neutral);

        let distribution = &report.comparative.distribution;
        assert_eq!(
            (distribution.positive, distribution.negative, distribution.neutral),
            (1, 1, 1)
        );
        assert_eq!(distribution.total(), report.articles.len() as u32);

        assert_eq!(
            report.final_sentiment,
            "Acme's news sentiment is neutral or mixed. Market response could go either way."
        );

        let differences = &report.comparative.coverage_differences;
        assert_eq!(differences.len(), 1);
        assert_eq!(
            differences[0].impact,
            "Article 1 is positive, while Article 2 is negative."
        );

        for article in &report.articles {
            assert!(!article.topics.is_empty());
        }

        assert_eq!(report.audio, format!("hi:{}", report.final_sentiment).into_bytes());
    }

    #[tokio::test]
    async fn test_zero_articles_still_produces_report() {
        let pipeline = pipeline_with(
            Arc::new(CannedSource(Vec::new())),
            Arc::new(OkTranslator),
            Arc::new(EchoSynthesizer),
        );

        let report = pipeline.analyze("Acme", 10).await.unwrap().unwrap();

        assert!(report.articles.is_empty());
        assert_eq!(report.comparative.distribution.total(), 0);
        assert_eq!(report.comparative.coverage_differences.len(), 1);
        assert_eq!(
            report.comparative.coverage_differences[0].comparison,
            "Not enough articles to compare."
        );
        assert!(report.comparative.topic_overlap.common_topics.is_empty());
        assert!(report.comparative.topic_overlap.unique_topics.is_empty());
        assert!(!report.final_sentiment.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_no_data() {
        let pipeline = pipeline_with(
            Arc::new(FailingSource),
            Arc::new(OkTranslator),
            Arc::new(EchoSynthesizer),
        );

        let report = pipeline.analyze("Acme", 10).await.unwrap();
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn test_translation_failure_uses_fallback() {
        let pipeline = pipeline_with(
            Arc::new(CannedSource(drafts())),
            Arc::new(FailingTranslator),
            Arc::new(EchoSynthesizer),
        );

        let report = pipeline.analyze("Acme", 10).await.unwrap().unwrap();

        // Narrative stays in the source language; synthesis receives the
        // fixed fallback text.
        assert_eq!(
            report.final_sentiment,
            "Acme's news sentiment is neutral or mixed. Market response could go either way."
        );
        assert_eq!(report.audio, sn_speech::TRANSLATION_FALLBACK.as_bytes());
    }

    #[tokio::test]
    async fn test_synthesis_failure_is_fatal() {
        let pipeline = pipeline_with(
            Arc::new(CannedSource(drafts())),
            Arc::new(OkTranslator),
            Arc::new(FailingSynthesizer),
        );

        let result = pipeline.analyze("Acme", 10).await;
        assert!(matches!(result, Err(Error::Synthesis(_))));
    }

    #[tokio::test]
    async fn test_article_cap_applies() {
        let pipeline = pipeline_with(
            Arc::new(CannedSource(drafts())),
            Arc::new(OkTranslator),
            Arc::new(EchoSynthesizer),
        );

        let report = pipeline.analyze("Acme", 2).await.unwrap().unwrap();
        assert_eq!(report.articles.len(), 2);
        assert_eq!(report.comparative.distribution.total(), 2);
    }
}
