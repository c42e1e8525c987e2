//! Reduce a user-typed website URL to a bare domain.

use std::fmt;

/// Domain with no scheme, no leading `www.`, and no path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedDomain(String);

impl NormalizedDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes a raw website URL into a domain.
///
/// - Trims surrounding whitespace
/// - Strips one leading `http://` or `https://` (case-sensitive)
/// - Strips one leading `www.`
/// - Keeps only the text before the first `/`
///
/// No further validation: an empty result is passed on as-is and the
/// service rejects it.
pub fn normalize_domain(raw: &str) -> NormalizedDomain {
    let s = raw.trim();
    let s = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s);
    let s = s.strip_prefix("www.").unwrap_or(s);
    let host = s.split('/').next().unwrap_or_default();
    NormalizedDomain(host.to_string())
}
