use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use sn_core::{Error, Result};

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Renders the text as spoken audio in the given language, returning
    /// the raw MP3 bytes.
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>>;
}

/// Synthesizer backed by the public Google text-to-speech endpoint.
pub struct GoogleSynthesizer {
    client: Arc<Client>,
    base_url: String,
}

impl GoogleSynthesizer {
    pub fn new() -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: "https://translate.google.com".to_string(),
        }
    }
}

impl Default for GoogleSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GoogleSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSynthesizer")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSynthesizer {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(format!("{}/translate_tts", self.base_url))
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| Error::Synthesis(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Synthesis(e.to_string()))?;

        let audio = response
            .bytes()
            .await
            .map_err(|e| Error::Synthesis(e.to_string()))?;

        if audio.is_empty() {
            return Err(Error::Synthesis("Empty audio response".to_string()));
        }

        Ok(audio.to_vec())
    }
}
