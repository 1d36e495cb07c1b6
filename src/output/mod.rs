// Output formatting — terminal display of article digests.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn long_strings_get_ellipsis() {
        assert_eq!(truncate_chars("abcdefgh", 5), "abcde...");
    }

    #[test]
    fn multibyte_boundaries_are_safe() {
        assert_eq!(truncate_chars("héllo wörld", 6), "héllo ...");
    }
}
