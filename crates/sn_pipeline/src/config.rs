/// Per-pipeline settings. One instance is shared by every request.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Article cap applied when the request does not override it
    pub max_articles: usize,
    /// Language the narrative verdict is written in
    pub source_lang: String,
    /// Language the spoken summary is delivered in
    pub target_lang: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_articles: 10,
            source_lang: "en".to_string(),
            target_lang: "hi".to_string(),
        }
    }
}
