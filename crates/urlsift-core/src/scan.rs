//! One full collection run: fetch from every source in order, deduplicate,
//! classify.
//!
//! A failed source is logged and contributes nothing; the run only fails if
//! classification itself cannot be set up.

use anyhow::Result;
use std::collections::HashSet;

use crate::classify::{Classifier, Partition};
use crate::config::SiftConfig;
use crate::http::HttpOptions;
use crate::sources::{OtxSource, UrlSource, WaybackSource};

/// Result of a scan: deduplicated total plus the two sorted buckets.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Number of distinct URLs collected across all sources.
    pub total: usize,
    /// URLs not matching any sensitive extension.
    pub normal: Vec<String>,
    /// URLs matching a sensitive extension.
    pub filtered: Vec<String>,
}

/// Fetches from each source sequentially and unions the results.
///
/// Equality is exact string match; whitespace-trimmed empties are dropped.
/// A source error is recovered here: logged, empty result substituted.
pub fn collect_urls(
    sources: &[Box<dyn UrlSource>],
    domain: &str,
    http: &HttpOptions,
) -> HashSet<String> {
    let mut seen: HashSet<String> = HashSet::new();

    for source in sources {
        tracing::info!("fetching URLs for {} from {}", domain, source.name());
        match source.fetch(domain, http) {
            Ok(urls) => {
                tracing::info!("{}: {} URLs", source.name(), urls.len());
                seen.extend(
                    urls.into_iter()
                        .map(|url| url.trim().to_string())
                        .filter(|url| !url.is_empty()),
                );
            }
            Err(err) => {
                tracing::error!("{} fetch failed: {:#}", source.name(), err);
            }
        }
    }

    seen
}

/// Runs the full pipeline for an already-normalized domain.
pub fn run_scan(domain: &str, cfg: &SiftConfig) -> Result<ScanOutcome> {
    let http = cfg.http_options();
    let sources: Vec<Box<dyn UrlSource>> = vec![
        Box::new(WaybackSource),
        Box::new(OtxSource {
            page_limit: cfg.otx_page_limit,
            max_pages: cfg.otx_max_pages,
        }),
    ];

    let collected = collect_urls(&sources, domain, &http);
    let total = collected.len();

    let classifier = Classifier::new(&cfg.extra_extensions)?;
    let Partition { normal, filtered } = classifier.partition(collected);

    Ok(ScanOutcome {
        total,
        normal,
        filtered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FixedSource {
        name: &'static str,
        urls: Vec<&'static str>,
    }

    impl UrlSource for FixedSource {
        fn name(&self) -> &'static str {
            self.name
        }
        fn fetch(&self, _domain: &str, _http: &HttpOptions) -> Result<Vec<String>> {
            Ok(self.urls.iter().map(|u| u.to_string()).collect())
        }
    }

    struct FailingSource;

    impl UrlSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }
        fn fetch(&self, _domain: &str, _http: &HttpOptions) -> Result<Vec<String>> {
            Err(anyhow!("connection refused"))
        }
    }

    fn http() -> HttpOptions {
        HttpOptions::with_timeout(1)
    }

    #[test]
    fn overlapping_sources_deduplicate_exactly() {
        let sources: Vec<Box<dyn UrlSource>> = vec![
            Box::new(FixedSource {
                name: "a",
                urls: vec!["https://e.com/1", "https://e.com/2"],
            }),
            Box::new(FixedSource {
                name: "b",
                urls: vec!["https://e.com/2", "https://e.com/3"],
            }),
        ];
        let set = collect_urls(&sources, "e.com", &http());
        assert_eq!(set.len(), 3);
        assert!(set.contains("https://e.com/2"));
    }

    #[test]
    fn failing_source_is_recovered() {
        let sources: Vec<Box<dyn UrlSource>> = vec![
            Box::new(FailingSource),
            Box::new(FixedSource {
                name: "ok",
                urls: vec!["https://e.com/only"],
            }),
        ];
        let set = collect_urls(&sources, "e.com", &http());
        assert_eq!(set.len(), 1);
        assert!(set.contains("https://e.com/only"));
    }

    #[test]
    fn blank_and_whitespace_urls_are_dropped() {
        let sources: Vec<Box<dyn UrlSource>> = vec![Box::new(FixedSource {
            name: "messy",
            urls: vec!["  https://e.com/x  ", "", "   "],
        })];
        let set = collect_urls(&sources, "e.com", &http());
        assert_eq!(set.len(), 1);
        assert!(set.contains("https://e.com/x"));
    }
}
