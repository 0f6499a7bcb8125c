use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use sn_core::{Error, Result};
use tracing::warn;

/// Fixed apology returned when translation fails. The pipeline must keep
/// going with this string rather than abort.
pub const TRANSLATION_FALLBACK: &str = "अनुवाद करने में त्रुटि हुई।";

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Translator backed by the public Google translate endpoint.
pub struct GoogleTranslator {
    client: Arc<Client>,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: "https://translate.googleapis.com".to_string(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let response = self
            .client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        // The endpoint answers with nested arrays; the translated text is
        // the first element of each segment under index 0.
        let segments = response
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| Error::Translation("Unexpected response shape".to_string()))?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
            .collect();

        if translated.is_empty() {
            return Err(Error::Translation("Empty translation".to_string()));
        }

        Ok(translated)
    }
}

/// Translates the narrative, absorbing any failure into the fixed
/// target-language apology.
pub async fn translate_or_fallback(
    translator: &dyn Translator,
    text: &str,
    source: &str,
    target: &str,
) -> String {
    match translator.translate(text, source, target).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!("Translation failed, using fallback text: {}", e);
            TRANSLATION_FALLBACK.to_string()
        }
    }
}
