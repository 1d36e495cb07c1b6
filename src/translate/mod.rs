// Translation — the second external collaborator in front of the engine.
//
// The engine always runs on text already in the target language. The trait
// keeps providers swappable: the passthrough implementation covers the
// no-endpoint case (and source == target), the LibreTranslate client covers
// real cross-language requests.

pub mod libre;

use anyhow::Result;
use async_trait::async_trait;

pub use libre::LibreTranslator;

/// Trait for translating text into a target language.
///
/// Implementations must return the text unchanged when it is already in the
/// target language. Async because real providers are HTTP APIs.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang` (an ISO 639-1 code).
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
}

/// Passthrough translator — returns input verbatim.
///
/// Used when no translate endpoint is configured; the digest then runs on
/// the article's original language.
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(&self, text: &str, _target_lang: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
