//! CLI for the urlsift archive-URL collector.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use urlsift_core::{config, domain, report, scan};

/// Collect every URL two public archive services know for a domain and
/// split out the ones with sensitive-looking file extensions.
#[derive(Debug, Parser)]
#[command(name = "urlsift")]
#[command(about = "Collect and classify archived URLs for a domain", long_about = None)]
pub struct Cli {
    /// Target domain (e.g. example.com); full URLs are accepted and
    /// reduced to their host.
    #[arg(short, long)]
    pub domain: String,

    /// Output file for normal URLs; filtered URLs go to a sibling file
    /// with `_filtered` appended to the stem. Without this, normal URLs
    /// are printed and filtered URLs go to `filtered_urls.txt`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    // The only fatal error in a run: invalid domain exits with status 1
    // before anything touches the network or the filesystem.
    let domain = domain::normalize_domain(&cli.domain)?;
    println!("Processing domain: {domain}");

    // A broken config file should not turn a scan into a hard failure.
    let cfg = config::load_or_init().unwrap_or_else(|err| {
        tracing::warn!("config load failed, using defaults: {:#}", err);
        config::SiftConfig::default()
    });
    tracing::debug!("loaded config: {:?}", cfg);

    let outcome = scan::run_scan(&domain, &cfg)?;
    println!("Total URLs found: {}", outcome.total);

    report::write_results(&outcome, cli.output.as_deref());
    Ok(())
}
