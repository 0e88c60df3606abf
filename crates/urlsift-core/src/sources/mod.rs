//! URL source adapters for the archive services.
//!
//! The scan loop only depends on the [`UrlSource`] trait and does not know
//! about CDX text output, OTX JSON, or any other concrete format.

mod otx;
mod wayback;

pub use otx::OtxSource;
pub use wayback::WaybackSource;

use anyhow::Result;

use crate::http::HttpOptions;

/// A remote index that can enumerate known URLs for a domain.
pub trait UrlSource {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetches every URL the source knows for `domain` (already
    /// normalized). An error here means the whole source is unusable for
    /// this run; the caller substitutes an empty result.
    fn fetch(&self, domain: &str, http: &HttpOptions) -> Result<Vec<String>>;
}
