// Article digest pipeline: fetch -> translate -> engine.
//
// Fetch and translate failures are upstream failures — the pipeline declines
// to run the engine and reports them upward with context. Once text is in
// hand, the summary path and the hashtag path are independent: one failing
// logs a warning and leaves its slot empty while the other still returns.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::engine::{self, Summary};
use crate::fetch::ArticleFetcher;
use crate::translate::Translator;

/// Knobs for a single digest request.
#[derive(Debug, Clone)]
pub struct DigestOptions {
    /// Target language code for translation and stopword filtering.
    pub language: String,
    /// Number of key-point clusters (clamped to the sentence count).
    pub num_clusters: usize,
    /// How many hashtags to emit.
    pub hashtag_count: usize,
    /// Fixed clustering seed; None for a fresh per-request generator.
    pub seed: Option<u64>,
}

/// The digest of one article. Either analysis slot can be empty when its
/// path failed — partial success is allowed.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDigest {
    pub title: String,
    pub summary: Option<Summary>,
    pub hashtags: Option<Vec<String>>,
}

/// Full pipeline: fetch the URL, translate title and body, digest.
pub async fn run(
    fetcher: &ArticleFetcher,
    translator: &dyn Translator,
    url: &str,
    options: &DigestOptions,
) -> Result<ArticleDigest> {
    let article = fetcher
        .fetch(url)
        .await
        .context("Upstream fetch failed")?;

    info!(
        title = %article.title,
        body_chars = article.body.len(),
        "Article fetched"
    );

    // Title and body translate independently — run both calls concurrently.
    let (title, body) = futures::try_join!(
        translator.translate(&article.title, &options.language),
        translator.translate(&article.body, &options.language),
    )
    .context("Upstream translation failed")?;

    Ok(digest(&title, &body, options))
}

/// Engine-only digest of already-translated text.
///
/// The two analysis paths share no state: a failure in one is logged and
/// leaves `None`, the other still produces its result.
pub fn digest(title: &str, body: &str, options: &DigestOptions) -> ArticleDigest {
    let summary = match engine::summarize(body, options.num_clusters, options.seed) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(error = %e, "Summary path failed");
            None
        }
    };

    let hashtags =
        match engine::hashtags(title, body, &options.language, options.hashtag_count) {
            Ok(tags) => Some(tags),
            Err(e) => {
                warn!(error = %e, "Hashtag path failed");
                None
            }
        };

    ArticleDigest {
        title: title.to_string(),
        summary,
        hashtags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> DigestOptions {
        DigestOptions {
            language: "en".to_string(),
            num_clusters: 2,
            hashtag_count: 5,
            seed: Some(1),
        }
    }

    #[test]
    fn digest_fills_both_slots_on_good_input() {
        let d = digest(
            "Flood Hits City",
            "Heavy flood hit the city today. Rescue teams responded quickly. \
             The city issued a flood warning.",
            &options(),
        );
        assert!(d.summary.is_some());
        assert!(d.hashtags.is_some());
    }

    #[test]
    fn empty_body_fails_summary_but_not_hashtags() {
        let d = digest("Flood Hits City", "", &options());
        assert!(d.summary.is_none());
        // Title tokens alone still produce hashtags
        let tags = d.hashtags.unwrap();
        assert!(tags.contains(&"#Flood".to_string()));
    }

    #[test]
    fn nothing_usable_leaves_both_slots_empty() {
        let d = digest("", "", &options());
        assert!(d.summary.is_none());
        assert!(d.hashtags.is_none());
    }
}
