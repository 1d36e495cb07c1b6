use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Nothing here is required for the local-text path — defaults cover every
/// knob. The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Default target language code for translation and stopword filtering.
    pub language: String,
    /// Default number of key-point clusters.
    pub num_clusters: usize,
    /// Default number of hashtags to emit.
    pub hashtag_count: usize,
    /// LibreTranslate-compatible endpoint. When unset, translation is a
    /// passthrough and the digest runs on the article's original language.
    pub translate_url: Option<String>,
    /// API key for the translate endpoint, if it requires one.
    pub translate_api_key: Option<String>,
    /// User-Agent header for article fetches.
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> Result<Self> {
        let num_clusters = match env::var("GIST_CLUSTERS") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("GIST_CLUSTERS must be a positive integer: {v}"))?,
            Err(_) => 2,
        };
        let hashtag_count = match env::var("GIST_HASHTAGS") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("GIST_HASHTAGS must be a positive integer: {v}"))?,
            Err(_) => 5,
        };

        Ok(Self {
            language: env::var("GIST_LANG").unwrap_or_else(|_| "en".to_string()),
            num_clusters,
            hashtag_count,
            translate_url: env::var("GIST_TRANSLATE_URL").ok(),
            translate_api_key: env::var("GIST_TRANSLATE_API_KEY").ok(),
            user_agent: env::var("GIST_USER_AGENT")
                .unwrap_or_else(|_| "gist/0.1 (article digest)".to_string()),
        })
    }

    /// Check that a cluster count is usable before running the engine.
    pub fn require_clusters(num_clusters: usize) -> Result<()> {
        if num_clusters == 0 {
            anyhow::bail!("Number of clusters must be at least 1.");
        }
        Ok(())
    }
}
