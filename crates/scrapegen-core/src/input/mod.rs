//! Submitted form values and the domain normalizer.

mod normalize;

pub use normalize::{normalize_domain, NormalizedDomain};

/// Rejected form input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Website URL is required")]
    EmptyUrl,
}

/// Values of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    /// Free-text website URL; non-empty after trimming.
    pub website_url: String,
    /// Optional API key; empty means no authentication.
    pub api_key: String,
    /// Request the extended ("full") variant.
    pub full_version: bool,
}

impl FormInput {
    /// Builds a submission. Both text fields are trimmed; an empty URL is rejected.
    pub fn new(
        website_url: &str,
        api_key: Option<&str>,
        full_version: bool,
    ) -> Result<Self, InputError> {
        let website_url = website_url.trim();
        if website_url.is_empty() {
            return Err(InputError::EmptyUrl);
        }
        Ok(Self {
            website_url: website_url.to_string(),
            api_key: api_key.map(str::trim).unwrap_or_default().to_string(),
            full_version,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
