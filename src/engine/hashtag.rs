// Keyword ranking and hashtag formatting.
//
// Title and body are tokenized independently, stopwords filtered per
// language, and every surviving title token is counted twice — titles are
// denser signal than body text, so their terms get a deliberate boost.
//
// The weighted token stream is scored as one synthetic TF-IDF unit. With a
// single unit the IDF collapses to a constant, so this is a smoothed
// term-frequency ranking; the title duplication still biases the counts.
// Vectorizing title and body as two units would enable real IDF contrast,
// but that changes which terms win — the single-unit behavior is kept on
// purpose (see DESIGN.md).

use super::error::EngineError;
use super::vectorize;
use crate::nlp::{stopwords, tokenize};

/// A scored term eligible for promotion to a published hashtag.
#[derive(Debug, Clone)]
pub struct HashtagCandidate {
    pub term: String,
    pub score: f64,
}

/// Score keyword candidates from a title and body.
///
/// Returns candidates in descending score order; ties keep first-occurrence
/// order from the combined (title-first) token stream. Fails with
/// `EngineError::EmptyVocabulary` only when both title and body yield zero
/// surviving tokens.
pub fn rank_candidates(
    title: &str,
    body: &str,
    language_code: &str,
) -> Result<Vec<HashtagCandidate>, EngineError> {
    let stopword_set = stopwords::for_language(language_code);

    let title_tokens = tokenize::keyword_tokens(title, &stopword_set);
    let body_tokens = tokenize::keyword_tokens(body, &stopword_set);

    // Title tokens counted twice, body tokens once.
    let mut stream = Vec::with_capacity(title_tokens.len() * 2 + body_tokens.len());
    stream.extend(title_tokens.iter().cloned());
    stream.extend(title_tokens);
    stream.extend(body_tokens);

    if stream.is_empty() {
        return Err(EngineError::EmptyVocabulary);
    }

    let vectorized = vectorize::vectorize_tokenized(&[stream]);
    let vector = &vectorized.vectors[0];

    // Vocabulary order is first occurrence in the stream, so a stable sort
    // by descending score gives exactly the tie-break we want.
    let mut candidates: Vec<HashtagCandidate> = vectorized
        .vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| HashtagCandidate {
            term: term.clone(),
            score: vector.get(i),
        })
        .collect();
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    Ok(candidates)
}

/// Rank and format the top `n` hashtags as `#Capitalizedterm`.
///
/// Returns fewer than `n` when fewer distinct terms survive filtering —
/// no padding, no error.
pub fn rank_hashtags(
    title: &str,
    body: &str,
    language_code: &str,
    n: usize,
) -> Result<Vec<String>, EngineError> {
    let candidates = rank_candidates(title, body, language_code)?;
    Ok(candidates
        .into_iter()
        .take(n)
        .map(|c| format!("#{}", capitalize(&c.term)))
        .collect())
}

/// Uppercase the first character; the rest is already lowercase from
/// tokenization.
fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashtags_are_capitalized_with_prefix() {
        let tags = rank_hashtags("Flood Warning", "", "en", 5).unwrap();
        assert!(tags.contains(&"#Flood".to_string()));
        assert!(tags.contains(&"#Warning".to_string()));
    }

    #[test]
    fn count_never_exceeds_n() {
        let tags = rank_hashtags(
            "Flood Hits City",
            "Heavy flood damage reported across several districts today",
            "en",
            3,
        )
        .unwrap();
        assert!(tags.len() <= 3);
    }

    #[test]
    fn fewer_terms_than_n_returns_all() {
        let tags = rank_hashtags("Flood", "", "en", 5).unwrap();
        assert_eq!(tags, vec!["#Flood"]);
    }

    #[test]
    fn title_term_outscores_repeated_body_term() {
        // "flood" once in the title counts twice; "rescue" twice in the
        // body counts twice. Equal counts — the title term must not rank
        // below the body term.
        let candidates =
            rank_candidates("Flood emergency", "Rescue crews said rescue works continue", "en")
                .unwrap();
        let flood = candidates.iter().position(|c| c.term == "flood").unwrap();
        let rescue = candidates.iter().position(|c| c.term == "rescue").unwrap();
        let flood_score = candidates[flood].score;
        let rescue_score = candidates[rescue].score;
        assert!(flood_score >= rescue_score);
    }

    #[test]
    fn stopwords_and_short_tokens_are_dropped() {
        let tags = rank_hashtags("The and with", "a an of to", "en", 5);
        assert_eq!(tags.unwrap_err(), EngineError::EmptyVocabulary);
    }

    #[test]
    fn empty_title_and_body_fail() {
        assert_eq!(
            rank_hashtags("", "", "en", 5).unwrap_err(),
            EngineError::EmptyVocabulary
        );
    }

    #[test]
    fn unknown_language_skips_stopword_filtering() {
        // "said" is an English stopword supplement; with an unknown code it
        // survives and can become a hashtag.
        let tags = rank_hashtags("Mayor said nothing", "", "zz", 5).unwrap();
        assert!(tags.contains(&"#Said".to_string()));
    }
}
