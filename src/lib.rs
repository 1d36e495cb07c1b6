// gist: key-point summaries and hashtag keywords for news articles.
//
// This is the library root. The engine module is the pure text-analysis
// core; fetch and translate are its external collaborators; pipeline wires
// them together for the CLI.

pub mod config;
pub mod engine;
pub mod fetch;
pub mod nlp;
pub mod output;
pub mod pipeline;
pub mod translate;
