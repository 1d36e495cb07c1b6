// Colored terminal output for article digests.
//
// All terminal-specific formatting lives here; main.rs just hands over the
// digest. Layout mirrors the sections the digest produces: key points,
// short summary, long summary, hashtags.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::pipeline::ArticleDigest;

/// Display a full article digest in the terminal.
pub fn display_digest(digest: &ArticleDigest) {
    println!(
        "\n{}",
        format!("=== {} ===", truncate_chars(&digest.title, 76)).bold()
    );

    match &digest.summary {
        Some(summary) => {
            println!("\n{}", "Key points:".bold());
            for (i, point) in summary.key_points.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, point);
            }

            println!("\n{}", "Short summary:".bold());
            println!("  {}", summary.short_summary);

            println!("\n{}", "Long summary:".bold());
            println!("  {}", summary.long_summary.dimmed());
        }
        None => {
            println!(
                "\n  {}",
                "No summary — the article body produced no sentences.".yellow()
            );
        }
    }

    match &digest.hashtags {
        Some(tags) if !tags.is_empty() => {
            println!("\n{}", "Hashtags:".bold());
            println!("  {}", tags.join(" ").green().bold());
        }
        Some(_) | None => {
            println!(
                "\n  {}",
                "No hashtags — no keywords survived filtering.".yellow()
            );
        }
    }

    println!();
}
