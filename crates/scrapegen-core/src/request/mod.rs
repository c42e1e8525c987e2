//! Upstream and relay URL composition.
//!
//! The upstream service address is built from the normalized domain, the
//! variant flag and the optional API key, then embedded (percent-encoded) as
//! the query of the relay address. No I/O happens here.

mod encode;

pub use encode::encode_component;

use crate::config::ScrapegenConfig;
use crate::input::{normalize_domain, FormInput, NormalizedDomain};

/// Query parameter carrying the API key on the upstream URL.
pub const API_KEY_PARAM: &str = "FIRECRAWL_API_KEY";

/// Path suffix selecting the extended variant.
pub const FULL_SUFFIX: &str = "/full";

/// Composes the upstream service URL.
///
/// `service_base + domain`, then `/full` when `full_version`, then
/// `?FIRECRAWL_API_KEY=<encoded key>` when `api_key` is non-empty.
pub fn build_upstream_url(
    service_base: &str,
    domain: &NormalizedDomain,
    full_version: bool,
    api_key: &str,
) -> String {
    let mut url = String::with_capacity(service_base.len() + domain.as_str().len() + 32);
    url.push_str(service_base);
    url.push_str(domain.as_str());
    if full_version {
        url.push_str(FULL_SUFFIX);
    }
    if !api_key.is_empty() {
        url.push('?');
        url.push_str(API_KEY_PARAM);
        url.push('=');
        url.push_str(&encode_component(api_key));
    }
    url
}

/// Embeds `upstream` as the percent-encoded query of the relay address.
pub fn wrap_for_relay(relay_base: &str, upstream: &str) -> String {
    format!("{}{}", relay_base, encode_component(upstream))
}

/// Everything the transport needs for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub domain: NormalizedDomain,
    /// Address of the text-generation service.
    pub upstream: String,
    /// Address actually dispatched (relay wrapping `upstream`).
    pub relay: String,
}

/// Builds relay requests against a fixed service/relay pair.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    service_base: String,
    relay_base: String,
}

impl RequestBuilder {
    pub fn new(service_base: impl Into<String>, relay_base: impl Into<String>) -> Self {
        Self {
            service_base: service_base.into(),
            relay_base: relay_base.into(),
        }
    }

    pub fn from_config(cfg: &ScrapegenConfig) -> Self {
        Self::new(cfg.service_base.clone(), cfg.relay_base.clone())
    }

    /// Normalizes the URL field and composes both addresses.
    pub fn build(&self, input: &FormInput) -> BuiltRequest {
        let domain = normalize_domain(&input.website_url);
        let upstream = build_upstream_url(
            &self.service_base,
            &domain,
            input.full_version,
            &input.api_key,
        );
        let relay = wrap_for_relay(&self.relay_base, &upstream);
        BuiltRequest {
            domain,
            upstream,
            relay,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::from_config(&ScrapegenConfig::default())
    }
}
