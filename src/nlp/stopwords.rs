// Per-language stopword sets for keyword ranking.
//
// Modeled as a lookup from language code to a set of words rather than
// conditional branches, so adding a language is one match arm. Unknown codes
// get the empty set — ranking still proceeds, just without language-specific
// filtering.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Extra stopwords per language, beyond the base lists.
///
/// News articles lean on a handful of reporting words ("said", "will") that
/// the base lists don't cover but that make terrible hashtags.
const EXTRA_EN: &[&str] = &["said", "will", "also", "one", "new", "make"];
const EXTRA_ID: &[&str] = &[
    "dan", "yang", "di", "dari", "pada", "untuk", "dengan", "ke", "dalam", "adalah",
];
const EXTRA_ES: &[&str] = &["y", "el", "en", "con", "para", "de"];
const EXTRA_FR: &[&str] = &["et", "le", "est", "dans", "sur", "avec"];

/// Look up the stopword set for a language code.
///
/// Supported codes: `en`, `id`, `es`, `fr`. Anything else returns an empty
/// set so the caller's filtering degrades to a no-op.
pub fn for_language(code: &str) -> HashSet<String> {
    let (base, extra) = match code {
        "en" => (Some(LANGUAGE::English), EXTRA_EN),
        "id" => (Some(LANGUAGE::Indonesian), EXTRA_ID),
        "es" => (Some(LANGUAGE::Spanish), EXTRA_ES),
        "fr" => (Some(LANGUAGE::French), EXTRA_FR),
        _ => (None, &[] as &[&str]),
    };

    let mut set: HashSet<String> = match base {
        Some(language) => get(language).into_iter().collect(),
        None => HashSet::new(),
    };
    set.extend(extra.iter().map(|w| w.to_string()));
    set
}
