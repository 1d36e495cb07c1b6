// LibreTranslate API implementation.
//
// Works against any LibreTranslate-compatible endpoint (self-hosted or the
// public instances). Source language is auto-detected server-side; when the
// detected source already matches the target, the endpoint returns the text
// unchanged, which is exactly the contract the Translator trait requires.
//
// API docs: https://libretranslate.com/docs/

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Translator;

/// HTTP client for a LibreTranslate-compatible translate endpoint.
pub struct LibreTranslator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslator {
    /// Create a translator pointing at the given base URL
    /// (e.g. `https://libretranslate.example.com`).
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let url = format!("{}/translate", self.base_url);

        debug!(target = target_lang, chars = text.len(), "Translate request");

        let request = TranslateRequest {
            q: text.to_string(),
            source: "auto".to_string(),
            target: target_lang.to_string(),
            format: "text".to_string(),
            api_key: self.api_key.clone(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to call translate endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translate endpoint returned {status}: {body}");
        }

        let result: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse translate response")?;

        Ok(result.translated_text)
    }
}

#[derive(Serialize)]
struct TranslateRequest {
    q: String,
    source: String,
    target: String,
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}
