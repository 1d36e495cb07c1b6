// Tokenization rules shared by the vectorizer and the hashtag ranker.

use std::collections::HashSet;

/// Lowercase alphanumeric tokens, in order of appearance.
///
/// Any run of non-alphanumeric characters is a separator. This is the
/// tokenization the TF-IDF vectorizer uses for every unit.
pub fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Keyword-candidate tokens: lowercase alphanumeric, longer than 3
/// characters, and not in the stopword set.
///
/// This is the stricter filter the hashtag ranker applies to title and
/// body text before scoring.
pub fn keyword_tokens(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    tokens(text)
        .into_iter()
        .filter(|t| t.chars().count() > 3 && !stopwords.contains(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_lowercase_and_split_on_punctuation() {
        assert_eq!(
            tokens("Flood Hits City, again-today!"),
            vec!["flood", "hits", "city", "again", "today"]
        );
    }

    #[test]
    fn tokens_keep_digits() {
        assert_eq!(tokens("in 2024 alone"), vec!["in", "2024", "alone"]);
    }

    #[test]
    fn keyword_tokens_drop_short_and_stopwords() {
        let stopwords: HashSet<String> = ["today".to_string()].into_iter().collect();
        assert_eq!(
            keyword_tokens("The flood hit the city today", &stopwords),
            vec!["flood", "city"]
        );
    }

    #[test]
    fn keyword_tokens_length_is_in_chars() {
        // 4 multi-byte characters should pass the length > 3 filter
        let empty = HashSet::new();
        assert_eq!(keyword_tokens("műhely", &empty), vec!["műhely"]);
    }
}
