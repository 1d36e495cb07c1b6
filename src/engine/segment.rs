// Sentence segmentation — the first step of both summary paths.
//
// Splits on `.` `!` `?` when followed by whitespace or end-of-text, keeping
// the terminator with its sentence. Text with no detected boundary comes back
// as a single trimmed sentence, so downstream clustering always has input.

use super::error::EngineError;

/// Split article text into an ordered sequence of sentences.
///
/// Sentences keep their original order and their terminating punctuation.
/// Fails with `EngineError::EmptyInput` when the trimmed input is empty —
/// callers must not run clustering or composition in that case.
pub fn segment(text: &str) -> Result<Vec<String>, EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);

        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        // A terminator only ends a sentence at end-of-text or before
        // whitespace. "3.5" and "U.S.A" stay intact.
        let at_end = i + 1 >= chars.len();
        let next_is_space = !at_end && chars[i + 1].is_whitespace();

        if at_end || next_is_space {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    // Trailing text without a terminator still counts as a sentence.
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_basic_sentences() {
        let sentences = segment("Hello world. This is a test. Final sentence.").unwrap();
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Hello world.");
        assert_eq!(sentences[1], "This is a test.");
        assert_eq!(sentences[2], "Final sentence.");
    }

    #[test]
    fn question_and_exclamation_are_boundaries() {
        let sentences = segment("Is this working? Yes it is! Great.").unwrap();
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn no_boundary_yields_single_sentence() {
        let sentences = segment("  no ending punctuation here  ").unwrap();
        assert_eq!(sentences, vec!["no ending punctuation here"]);
    }

    #[test]
    fn decimal_point_is_not_a_boundary() {
        let sentences = segment("Inflation hit 3.5 percent. Markets fell.").unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Inflation hit 3.5 percent.");
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(segment("   \n\t ").unwrap_err(), EngineError::EmptyInput);
        assert_eq!(segment("").unwrap_err(), EngineError::EmptyInput);
    }
}
