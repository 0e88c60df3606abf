//! Result persistence: normal/filtered output files, or console listing
//! plus the default filtered file.
//!
//! Write failures are reported and recovered; a failure on one file never
//! prevents the other from being written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scan::ScanOutcome;

/// Filtered URLs land here when no output path was given.
pub const DEFAULT_FILTERED_FILE: &str = "filtered_urls.txt";

/// Sibling path with `_filtered` appended to the stem:
/// `out.txt` → `out_filtered.txt`, `results` → `results_filtered`.
pub fn filtered_sibling(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_filtered.{ext}"),
        None => format!("{stem}_filtered"),
    };
    path.with_file_name(name)
}

fn write_list(path: &Path, urls: &[String]) -> io::Result<()> {
    fs::write(path, urls.join("\n"))
}

fn write_reported(path: &Path, urls: &[String], label: &str) {
    match write_list(path, urls) {
        Ok(()) => {
            println!("Saved {} {} URLs to: {}", urls.len(), label, path.display());
        }
        Err(err) => {
            eprintln!(
                "urlsift: failed to write {} URLs to {}: {}",
                label,
                path.display(),
                err
            );
            tracing::error!("write {} failed: {}", path.display(), err);
        }
    }
}

/// Persists a scan outcome.
///
/// With `output`: normal URLs go to `output`, filtered URLs to its
/// `_filtered` sibling. Without: normal URLs are printed to stdout and
/// filtered URLs go to [`DEFAULT_FILTERED_FILE`] in the working directory.
pub fn write_results(outcome: &ScanOutcome, output: Option<&Path>) {
    match output {
        Some(path) => {
            write_reported(path, &outcome.normal, "normal");
            write_reported(&filtered_sibling(path), &outcome.filtered, "filtered");
        }
        None => {
            println!("Normal URLs ({}):", outcome.normal.len());
            for url in &outcome.normal {
                println!("{url}");
            }
            write_reported(
                Path::new(DEFAULT_FILTERED_FILE),
                &outcome.filtered,
                "filtered",
            );
        }
    }
}
