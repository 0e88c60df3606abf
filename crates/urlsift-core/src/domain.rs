//! Domain normalization: reduce user input to a bare lower-case host.
//!
//! Accepts full URLs ("https://www.Example.com/path") as well as bare hosts
//! ("example.com"). The result is used as the query key for both archive
//! services, so anything that is not host-shaped is rejected here, before
//! any network traffic.

use thiserror::Error;
use url::Url;

/// Invalid domain input. This is the only fatal error in a run.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Nothing host-like left after stripping scheme/`www.`/whitespace.
    #[error("invalid domain {input:?}: empty after normalization")]
    Empty { input: String },
    /// A host needs at least one dot ("notadomain" is not queryable).
    #[error("invalid domain {input:?}: no dot in host part")]
    NoDot { input: String },
}

/// Normalizes a user-supplied domain or URL to a bare lower-case host.
///
/// Strips the scheme (via `Url::parse` when one is present), a leading
/// `www.`, and surrounding whitespace. Path, query, and fragment are
/// discarded. Fails if the result is empty or contains no dot.
///
/// # Examples
///
/// - `normalize_domain("https://www.Example.com/path")` → `"example.com"`
/// - `normalize_domain("sub.example.com")` → `"sub.example.com"`
/// - `normalize_domain("notadomain")` → `Err(DomainError::NoDot)`
pub fn normalize_domain(input: &str) -> Result<String, DomainError> {
    let trimmed = input.trim();

    // Url::parse only succeeds on absolute URLs; bare hosts like
    // "example.com" fall through to manual splitting.
    let host = match Url::parse(trimmed) {
        Ok(parsed) if parsed.host_str().is_some() => parsed.host_str().unwrap().to_string(),
        _ => trimmed
            .split(['/', '?', '#'])
            .next()
            .unwrap_or("")
            .to_string(),
    };

    let host = host.trim().to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();

    if host.is_empty() {
        return Err(DomainError::Empty {
            input: input.to_string(),
        });
    }
    if !host.contains('.') {
        return Err(DomainError::NoDot {
            input: input.to_string(),
        });
    }
    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_is_reduced_to_host() {
        assert_eq!(
            normalize_domain("https://www.Example.com/path").unwrap(),
            "example.com"
        );
        assert_eq!(
            normalize_domain("http://sub.example.org/a?b=c#d").unwrap(),
            "sub.example.org"
        );
    }

    #[test]
    fn bare_host_passes_through_lowercased() {
        assert_eq!(normalize_domain("Example.COM").unwrap(), "example.com");
        assert_eq!(normalize_domain("  example.com  ").unwrap(), "example.com");
    }

    #[test]
    fn bare_host_with_path_drops_the_path() {
        assert_eq!(
            normalize_domain("example.com/some/path").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn www_prefix_is_stripped() {
        assert_eq!(normalize_domain("www.example.com").unwrap(), "example.com");
        // Only a leading www., not one inside the name.
        assert_eq!(
            normalize_domain("wwwexample.com").unwrap(),
            "wwwexample.com"
        );
    }

    #[test]
    fn no_dot_is_rejected() {
        assert!(matches!(
            normalize_domain("notadomain"),
            Err(DomainError::NoDot { .. })
        ));
        assert!(matches!(
            normalize_domain("localhost"),
            Err(DomainError::NoDot { .. })
        ));
    }

    #[test]
    fn empty_and_whitespace_are_rejected() {
        assert!(matches!(
            normalize_domain(""),
            Err(DomainError::Empty { .. })
        ));
        assert!(matches!(
            normalize_domain("   "),
            Err(DomainError::Empty { .. })
        ));
    }

    #[test]
    fn scheme_only_www_host() {
        assert_eq!(
            normalize_domain("https://www.example.com").unwrap(),
            "example.com"
        );
    }
}
