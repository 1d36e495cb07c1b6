// Summary composition — joining selected sentences into display text.

/// Join key points into the short summary, preserving cluster order.
pub fn compose_short(key_points: &[String]) -> String {
    key_points.join(" ")
}

/// Join all segmented sentences into the long summary, in original order.
///
/// This is a normalized full-text reproduction, not a compression: every
/// sentence appears, whitespace between them collapsed to single spaces.
pub fn compose_long(sentences: &[String]) -> String {
    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_summary_preserves_order() {
        let points = vec!["Second cluster pick.".to_string(), "First pick.".to_string()];
        assert_eq!(compose_short(&points), "Second cluster pick. First pick.");
    }

    #[test]
    fn long_summary_joins_everything() {
        let sentences = vec![
            "One.".to_string(),
            "Two.".to_string(),
            "Three.".to_string(),
        ];
        assert_eq!(compose_long(&sentences), "One. Two. Three.");
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(compose_short(&[]), "");
        assert_eq!(compose_long(&[]), "");
    }
}
