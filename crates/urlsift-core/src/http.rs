//! Blocking HTTP GET helper built on the curl crate (libcurl).
//!
//! Both archive services are consumed with a single GET each, so the only
//! thing needed here is "fetch this URL's body as text with a timeout".

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

/// Per-request options shared by all sources.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Total transfer timeout.
    pub timeout: Duration,
    /// Connect-phase timeout.
    pub connect_timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

/// Performs a GET request and returns the response body as text.
///
/// Follows redirects. Any curl-level failure (timeout, DNS, TLS) or a
/// non-2xx status is an error; callers decide whether that is fatal.
pub fn get_text(url: &str, opts: &HttpOptions) -> Result<String> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    easy.useragent(&opts.user_agent)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    // CDX output and OTX JSON are ASCII in practice; tolerate stray bytes.
    Ok(String::from_utf8_lossy(&body).into_owned())
}

impl HttpOptions {
    /// Options used by tests and ad-hoc callers; real runs build these from
    /// the loaded config.
    pub fn with_timeout(secs: u64) -> Self {
        HttpOptions {
            timeout: Duration::from_secs(secs),
            connect_timeout: Duration::from_secs(secs),
            user_agent: crate::config::DEFAULT_USER_AGENT.to_string(),
        }
    }
}
