//! AlienVault OTX threat-intelligence source.
//!
//! Queries the hostname indicator's `url_list` endpoint. The response is a
//! JSON page with a `url_list` array and a `has_next` flag; pages are
//! followed up to a configurable cap so results beyond the first page are
//! not silently dropped.

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use super::UrlSource;
use crate::http::{self, HttpOptions};

const OTX_API_BASE: &str = "https://otx.alienvault.com/api/v1/indicators/hostname";

/// The threat-intelligence URL index (OTX `url_list` API).
pub struct OtxSource {
    /// Page size sent as the `limit` parameter.
    pub page_limit: u32,
    /// Upper bound on pages fetched; 1 means first page only.
    pub max_pages: u32,
}

/// One page of the `url_list` response. Only the fields we consume.
#[derive(Debug, Deserialize)]
struct UrlListPage {
    #[serde(default)]
    url_list: Vec<UrlListEntry>,
    #[serde(default)]
    has_next: bool,
}

#[derive(Debug, Deserialize)]
struct UrlListEntry {
    url: String,
}

impl OtxSource {
    fn page_url(&self, domain: &str, page: u32) -> Result<Url> {
        let mut endpoint = Url::parse(&format!("{OTX_API_BASE}/{domain}/url_list"))
            .context("OTX endpoint URL")?;
        endpoint
            .query_pairs_mut()
            .append_pair("limit", &self.page_limit.to_string())
            .append_pair("page", &page.to_string());
        Ok(endpoint)
    }
}

impl UrlSource for OtxSource {
    fn name(&self) -> &'static str {
        "otx"
    }

    fn fetch(&self, domain: &str, http: &HttpOptions) -> Result<Vec<String>> {
        let mut urls = Vec::new();

        for page in 1..=self.max_pages.max(1) {
            let query = self.page_url(domain, page)?;
            let body = http::get_text(query.as_str(), http)?;
            let parsed: UrlListPage =
                serde_json::from_str(&body).context("parse OTX url_list JSON")?;

            urls.extend(parsed.url_list.into_iter().map(|entry| entry.url));

            if !parsed.has_next {
                break;
            }
            tracing::debug!("otx: page {} full, fetching next", page);
        }

        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_targets_hostname_endpoint() {
        let source = OtxSource {
            page_limit: 500,
            max_pages: 10,
        };
        let url = source.page_url("example.com", 1).unwrap();
        assert_eq!(
            url.as_str(),
            "https://otx.alienvault.com/api/v1/indicators/hostname/example.com/url_list?limit=500&page=1"
        );
    }

    #[test]
    fn url_list_page_parses_urls() {
        let body = r#"{
            "url_list": [
                {"url": "https://example.com/a", "date": "2024-01-01"},
                {"url": "https://example.com/b"}
            ],
            "has_next": true,
            "full_size": 1234
        }"#;
        let page: UrlListPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.url_list.len(), 2);
        assert_eq!(page.url_list[0].url, "https://example.com/a");
        assert!(page.has_next);
    }

    #[test]
    fn url_list_page_defaults_when_fields_missing() {
        let page: UrlListPage = serde_json::from_str("{}").unwrap();
        assert!(page.url_list.is_empty());
        assert!(!page.has_next);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(serde_json::from_str::<UrlListPage>("not json").is_err());
    }
}
