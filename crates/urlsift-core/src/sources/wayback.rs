//! Wayback Machine CDX index source.
//!
//! One GET against the CDX search API with a prefix match over the whole
//! domain, collapsed by URL key so each distinct URL appears once. Output
//! is plain text, one original URL per line.

use anyhow::{Context, Result};
use url::Url;

use super::UrlSource;
use crate::http::{self, HttpOptions};

const CDX_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";

/// The historical web-crawl index (web.archive.org CDX API).
pub struct WaybackSource;

impl WaybackSource {
    /// Builds the full query URL for `domain`. Percent-encoding of the
    /// parameters is handled by the `url` crate.
    fn query_url(domain: &str) -> Result<Url> {
        let mut endpoint = Url::parse(CDX_ENDPOINT).context("CDX endpoint URL")?;
        endpoint
            .query_pairs_mut()
            .append_pair("url", &format!("{domain}/*"))
            .append_pair("matchType", "prefix")
            .append_pair("collapse", "urlkey")
            .append_pair("output", "text")
            .append_pair("fl", "original");
        Ok(endpoint)
    }
}

impl UrlSource for WaybackSource {
    fn name(&self) -> &'static str {
        "wayback"
    }

    fn fetch(&self, domain: &str, http: &HttpOptions) -> Result<Vec<String>> {
        let query = Self::query_url(domain)?;
        let body = http::get_text(query.as_str(), http)?;
        Ok(parse_cdx_body(&body))
    }
}

/// Splits the CDX text response into URLs, one per non-blank line.
fn parse_cdx_body(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
