// Orchestration — wiring the collaborators to the engine.

pub mod article;

pub use article::{digest, run, ArticleDigest, DigestOptions};
