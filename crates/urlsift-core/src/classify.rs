//! Sensitive-extension classification.
//!
//! A single case-insensitive alternation over the extension list, where the
//! extension must be followed by end-of-string, a query marker, or a
//! fragment marker. Every collected URL is tested once.

use anyhow::{Context, Result};
use regex::Regex;

/// File extensions whose URLs land in the filtered bucket.
pub const SENSITIVE_EXTENSIONS: &[&str] = &[
    ".xls", ".xml", ".xlsx", ".json", ".pdf", ".sql", ".doc", ".docx", ".pptx", ".txt", ".zip",
    ".tar.gz", ".tgz", ".bak", ".7z", ".rar", ".log", ".cache", ".secret", ".db", ".backup",
    ".yml", ".gz", ".config", ".csv", ".yaml", ".md", ".md5", ".exe", ".dll", ".bin", ".ini",
    ".bat", ".sh", ".tar", ".deb", ".rpm", ".iso", ".img", ".apk", ".msi", ".dmg", ".tmp", ".crt",
    ".pem", ".key", ".pub", ".asc",
];

/// Result of classifying a URL set: two sorted, disjoint lists.
#[derive(Debug, Default)]
pub struct Partition {
    /// URLs not matching any sensitive extension.
    pub normal: Vec<String>,
    /// URLs matching a sensitive extension.
    pub filtered: Vec<String>,
}

/// Compiled extension matcher.
pub struct Classifier {
    pattern: Regex,
}

impl Classifier {
    /// Builds the matcher from the built-in extension list plus any
    /// user-configured additions. Extensions are matched literally
    /// (regex-escaped), case-insensitively.
    pub fn new(extra_extensions: &[String]) -> Result<Self> {
        let alternatives: Vec<String> = SENSITIVE_EXTENSIONS
            .iter()
            .copied()
            .chain(extra_extensions.iter().map(String::as_str))
            .map(regex::escape)
            .collect();

        let pattern = Regex::new(&format!(r"(?i)({})([?#]|$)", alternatives.join("|")))
            .context("compile extension pattern")?;
        Ok(Classifier { pattern })
    }

    /// True if `url` ends in a sensitive extension (optionally followed by
    /// `?query` or `#fragment`).
    pub fn is_sensitive(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    /// Splits `urls` into filtered/normal buckets. Both buckets are sorted
    /// so output is stable regardless of the input container's iteration
    /// order.
    pub fn partition<I>(&self, urls: I) -> Partition
    where
        I: IntoIterator<Item = String>,
    {
        let mut partition = Partition::default();
        for url in urls {
            if self.is_sensitive(&url) {
                partition.filtered.push(url);
            } else {
                partition.normal.push(url);
            }
        }
        partition.normal.sort();
        partition.filtered.sort();
        partition
    }
}
