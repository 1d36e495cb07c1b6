// Article fetcher — HTTP GET plus boilerplate-free text extraction.
//
// The engine only ever sees plain text: this client pulls the page, takes
// the <title> and the <p> element texts, strips markup and known ad banner
// phrases, and hands back a (title, body) pair. Anything that fails here is
// an upstream failure the caller reports as-is — the engine never runs on a
// failed fetch.

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::debug;

/// A fetched article reduced to plain text.
#[derive(Debug, Clone)]
pub struct FetchedArticle {
    pub title: String,
    pub body: String,
}

/// Ad and teaser phrases stripped from extracted body text. The Indonesian
/// phrases cover the "read also" teasers common on id-language news sites.
const AD_PATTERN: &str = r"(?i)(Advertisement|Scroll to Continue|Baca Juga|Lanjutkan dengan Konten)";

/// Thin reqwest wrapper for pulling article pages.
pub struct ArticleFetcher {
    client: reqwest::Client,
    title_re: Regex,
    paragraph_re: Regex,
    script_re: Regex,
    style_re: Regex,
    tag_re: Regex,
    ad_re: Regex,
}

impl ArticleFetcher {
    /// Build a fetcher with the given User-Agent header.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            title_re: Regex::new(r"(?is)<title[^>]*>(.*?)</title>")
                .context("title pattern")?,
            paragraph_re: Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p>")
                .context("paragraph pattern")?,
            script_re: Regex::new(r"(?is)<script[^>]*>.*?</script>")
                .context("script pattern")?,
            style_re: Regex::new(r"(?is)<style[^>]*>.*?</style>")
                .context("style pattern")?,
            tag_re: Regex::new(r"(?s)<[^>]+>").context("tag pattern")?,
            ad_re: Regex::new(AD_PATTERN).context("ad pattern")?,
        })
    }

    /// Fetch a URL and extract (title, body) text.
    pub async fn fetch(&self, url: &str) -> Result<FetchedArticle> {
        debug!(url = url, "Fetching article");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("Article fetch returned {} for {url}", response.status());
        }

        let html = response
            .text()
            .await
            .context("Failed to read article response body")?;

        Ok(self.extract(&html))
    }

    /// Reduce raw HTML to a plain-text article.
    ///
    /// Body text is every <p> element's text joined with single spaces, tags
    /// stripped, basic entities decoded, ad phrases removed. A page without
    /// a <title> reports "No Title Found".
    pub fn extract(&self, html: &str) -> FetchedArticle {
        let html = self.script_re.replace_all(html, " ");
        let html = self.style_re.replace_all(&html, " ");

        let title = self
            .title_re
            .captures(&html)
            .and_then(|c| c.get(1))
            .map(|m| normalize(&decode_entities(&self.strip_tags(m.as_str()))))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "No Title Found".to_string());

        let paragraphs: Vec<String> = self
            .paragraph_re
            .captures_iter(&html)
            .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
            .map(|p| normalize(&decode_entities(&self.strip_tags(&p))))
            .filter(|p| !p.is_empty())
            .collect();

        let joined = paragraphs.join(" ");
        let body = normalize(&self.ad_re.replace_all(&joined, ""));

        FetchedArticle { title, body }
    }

    fn strip_tags(&self, text: &str) -> String {
        self.tag_re.replace_all(text, " ").into_owned()
    }
}

/// Decode the handful of entities that actually show up in news markup.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
}

/// Collapse runs of whitespace to single spaces and trim.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
