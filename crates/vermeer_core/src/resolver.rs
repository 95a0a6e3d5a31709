//! Post URL resolution.

use crate::PostReference;
use regex::Regex;
use vermeer_error::{ResolverError, ResolverErrorKind};

/// Extracts post shortcodes from caller-supplied URLs.
///
/// Accepts any string containing a `/p/<id>` or `/reel/<id>` path segment,
/// where `<id>` runs up to the next `/`, `?`, `#` or `&`. Matching is
/// case-sensitive and tolerant of trailing query strings and fragments.
/// Pure string work; the resolver never touches the network.
///
/// # Examples
///
/// ```
/// use vermeer_core::ShortcodeResolver;
///
/// let resolver = ShortcodeResolver::new();
/// let post = resolver.resolve("https://instagram.com/p/ABC123/?utm=1").unwrap();
/// assert_eq!(post.shortcode, "ABC123");
/// ```
#[derive(Debug, Clone)]
pub struct ShortcodeResolver {
    shortcode_regex: Regex,
}

impl ShortcodeResolver {
    /// Create a resolver with the post-path pattern compiled.
    pub fn new() -> Self {
        // Shortcodes run to the next path, query, fragment or parameter
        // delimiter, matching the upstream URL grammar.
        let shortcode_regex =
            Regex::new(r"/(?:p|reel)/([^/?#&]+)").expect("Valid shortcode regex");
        Self { shortcode_regex }
    }

    /// Resolve an arbitrary input string to a [`PostReference`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolverErrorKind::InvalidUrl`] when no post segment is
    /// present. This is a client input error: callers map it to a 400 and
    /// nothing downstream runs.
    pub fn resolve(&self, raw_url: &str) -> Result<PostReference, ResolverError> {
        let shortcode = self
            .shortcode_regex
            .captures(raw_url)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
            .ok_or_else(|| {
                ResolverError::new(ResolverErrorKind::InvalidUrl(raw_url.to_string()))
            })?;

        Ok(PostReference {
            raw_url: raw_url.to_string(),
            shortcode,
        })
    }
}

impl Default for ShortcodeResolver {
    fn default() -> Self {
        Self::new()
    }
}
