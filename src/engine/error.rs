// Engine error taxonomy.
//
// The engine is pure and every failure here is recoverable at the call site.
// Upstream failures (fetch, translate) never reach this type — collaborators
// report those as anyhow errors and the pipeline passes them through.

use thiserror::Error;

/// Errors the text-analysis engine can produce.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The input text is empty after trimming — nothing to segment.
    #[error("nothing to segment: input text is empty")]
    EmptyInput,

    /// No sentences available to cluster.
    #[error("no sentences to cluster")]
    InsufficientData,

    /// No candidate keywords survived tokenization and stopword filtering.
    #[error("no candidate keywords survived filtering")]
    EmptyVocabulary,
}
