use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

mod config;

/// gist: key-point summaries and hashtag keywords for news articles.
///
/// Fetches an article (or reads local text), optionally translates it, then
/// extracts representative key-point sentences and ranked hashtags.
#[derive(Parser)]
#[command(name = "gist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an article URL, translate it, and digest it
    Url {
        /// The article URL
        url: String,

        /// Target language code (en, id, es, fr, ...)
        #[arg(long)]
        lang: Option<String>,

        /// Number of key-point clusters (1-5)
        #[arg(long)]
        clusters: Option<usize>,

        /// Number of hashtags to emit
        #[arg(long)]
        hashtags: Option<usize>,

        /// Fixed clustering seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print the digest as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Digest local article text (use "-" to read stdin)
    Text {
        /// Path to a plain-text article, or "-" for stdin
        file: String,

        /// Title used for hashtag ranking (defaults to the first line)
        #[arg(long)]
        title: Option<String>,

        /// Language code for stopword filtering
        #[arg(long)]
        lang: Option<String>,

        /// Number of key-point clusters (1-5)
        #[arg(long)]
        clusters: Option<usize>,

        /// Number of hashtags to emit
        #[arg(long)]
        hashtags: Option<usize>,

        /// Fixed clustering seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print the digest as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gist=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    match cli.command {
        Commands::Url {
            url,
            lang,
            clusters,
            hashtags,
            seed,
            json,
        } => {
            let options = digest_options(&config, lang, clusters, hashtags, seed)?;

            let fetcher = gist::fetch::ArticleFetcher::new(&config.user_agent)?;
            let translator = create_translator(&config)?;

            let digest =
                gist::pipeline::run(&fetcher, translator.as_ref(), &url, &options).await?;

            render(&digest, json)?;
        }

        Commands::Text {
            file,
            title,
            lang,
            clusters,
            hashtags,
            seed,
            json,
        } => {
            let options = digest_options(&config, lang, clusters, hashtags, seed)?;

            let body = read_text(&file)?;
            // Without an explicit title, the first line stands in — local
            // text files usually lead with a headline.
            let title = title.unwrap_or_else(|| {
                body.lines().next().unwrap_or_default().trim().to_string()
            });

            info!(chars = body.len(), "Digesting local text");

            let digest = gist::pipeline::digest(&title, &body, &options);
            render(&digest, json)?;
        }
    }

    Ok(())
}

/// Render a digest to the terminal, as JSON or formatted text.
fn render(digest: &gist::pipeline::ArticleDigest, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(digest)?);
    } else {
        gist::output::terminal::display_digest(digest);
    }
    Ok(())
}

/// Merge CLI flags over configured defaults into one options struct.
fn digest_options(
    config: &config::Config,
    lang: Option<String>,
    clusters: Option<usize>,
    hashtags: Option<usize>,
    seed: Option<u64>,
) -> Result<gist::pipeline::DigestOptions> {
    let num_clusters = clusters.unwrap_or(config.num_clusters);
    config::Config::require_clusters(num_clusters)?;

    Ok(gist::pipeline::DigestOptions {
        language: lang.unwrap_or_else(|| config.language.clone()),
        num_clusters,
        hashtag_count: hashtags.unwrap_or(config.hashtag_count),
        seed,
    })
}

/// Pick the translator backend: LibreTranslate when an endpoint is
/// configured, passthrough otherwise.
fn create_translator(
    config: &config::Config,
) -> Result<Box<dyn gist::translate::Translator>> {
    match &config.translate_url {
        Some(url) => {
            info!(endpoint = %url, "Using LibreTranslate endpoint");
            let translator =
                gist::translate::LibreTranslator::new(url, config.translate_api_key.clone())?;
            Ok(Box::new(translator))
        }
        None => {
            info!("No translate endpoint configured — passthrough translation");
            Ok(Box::new(gist::translate::PassthroughTranslator))
        }
    }
}

/// Read article text from a file, or stdin when the path is "-".
fn read_text(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read article text from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
    }
}
