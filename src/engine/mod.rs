// The text-analysis engine: pure, stateless, one document per call.
//
// Everything here takes plain strings in and hands structured text out.
// Fetching, translating, and rendering live elsewhere — the engine never
// touches I/O, shares no state across calls, and is safe to run
// concurrently for different documents.

pub mod cluster;
pub mod compose;
pub mod error;
pub mod hashtag;
pub mod segment;
pub mod vectorize;

use serde::Serialize;

pub use error::EngineError;
pub use hashtag::rank_hashtags;

/// The result of summarizing one article.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// One representative sentence per cluster, in cluster order.
    pub key_points: Vec<String>,
    /// The key points joined into a paragraph.
    pub short_summary: String,
    /// Every segmented sentence joined back together, in original order.
    pub long_summary: String,
}

/// Summarize an article into key points plus short and long summaries.
///
/// `num_clusters` is clamped to the sentence count. `seed` pins the
/// clustering initialization for reproducible output; pass `None` in
/// production for a fresh per-call generator.
pub fn summarize(
    article_text: &str,
    num_clusters: usize,
    seed: Option<u64>,
) -> Result<Summary, EngineError> {
    let sentences = segment::segment(article_text)?;
    let key_points = cluster::select_key_points(&sentences, num_clusters, seed)?;

    let short_summary = compose::compose_short(&key_points);
    let long_summary = compose::compose_long(&sentences);

    Ok(Summary {
        key_points,
        short_summary,
        long_summary,
    })
}

/// Rank the top `count` hashtags for an article.
///
/// Thin alias over [`hashtag::rank_hashtags`] so both engine entry points
/// live at the same level.
pub fn hashtags(
    title: &str,
    body: &str,
    language_code: &str,
    count: usize,
) -> Result<Vec<String>, EngineError> {
    hashtag::rank_hashtags(title, body, language_code, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_produces_all_three_outputs() {
        let text = "Heavy flood hit the city today. Rescue teams responded quickly. \
                    The city issued a flood warning.";
        let summary = summarize(text, 2, Some(11)).unwrap();

        assert_eq!(summary.key_points.len(), 2);
        assert_eq!(summary.short_summary, summary.key_points.join(" "));
        assert_eq!(
            summary.long_summary,
            "Heavy flood hit the city today. Rescue teams responded quickly. \
             The city issued a flood warning."
        );
    }

    #[test]
    fn summarize_empty_text_fails() {
        assert_eq!(summarize("  ", 2, None).unwrap_err(), EngineError::EmptyInput);
    }
}
