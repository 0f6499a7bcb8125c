use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use sn_core::{Error, Result};
use tracing::warn;
use url::Url;

use crate::sources::{ArticleDraft, NewsSource};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

const NO_TITLE: &str = "No title available";
const NO_LINK: &str = "No link available";
const NO_SUMMARY: &str = "No summary available";

#[derive(Debug, Clone)]
pub struct TimesOfIndiaSource {
    client: Client,
}

impl TimesOfIndiaSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    const BASE_URL: &'static str = "https://timesofindia.indiatimes.com";

    fn extract_article(&self, container: &ElementRef<'_>) -> Result<ArticleDraft> {
        let title_selector = Selector::parse("div.fHv_i.o58kM").unwrap();
        let summary_selector = Selector::parse("p.oxXSK.o58kM").unwrap();
        let link_selector = Selector::parse("a").unwrap();

        let title = container
            .select(&title_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| NO_TITLE.to_string());

        let link = match container
            .select(&link_selector)
            .next()
            .and_then(|el| el.value().attr("href"))
        {
            Some(href) => Url::parse(Self::BASE_URL)
                .and_then(|base| base.join(href))
                .map(String::from)
                .map_err(|e| Error::Extraction(format!("Failed to resolve link: {}", e)))?,
            None => NO_LINK.to_string(),
        };

        let summary = container
            .select(&summary_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_SUMMARY.to_string());

        Ok(ArticleDraft {
            title,
            link,
            summary,
        })
    }
}

impl Default for TimesOfIndiaSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSource for TimesOfIndiaSource {
    fn source(&self) -> &str {
        "Times of India"
    }

    fn topic_url(&self, topic: &str) -> String {
        format!("{}/topic/{}", Self::BASE_URL, topic)
    }

    async fn fetch_topic_page(&self, topic: &str) -> Result<String> {
        let response = self
            .client
            .get(self.topic_url(topic))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    fn extract_articles(&self, html: &str, cap: usize) -> Vec<ArticleDraft> {
        let document = Html::parse_document(html);
        let container_selector = Selector::parse("div.uwU81").unwrap();

        let mut drafts = Vec::new();
        for container in document.select(&container_selector).take(cap) {
            match self.extract_article(&container) {
                Ok(draft) => drafts.push(draft),
                Err(e) => warn!("Skipping an article: {}", e),
            }
        }
        drafts
    }
}
