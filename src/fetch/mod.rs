// Document acquisition — fetching an article URL and reducing it to text.

pub mod client;

pub use client::{ArticleFetcher, FetchedArticle};
