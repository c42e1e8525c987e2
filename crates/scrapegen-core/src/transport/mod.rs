//! Relay GET and response classification.
//!
//! Uses the curl crate (libcurl) for a single `GET` with `Accept: text/plain`.
//! Redirects are followed; no timeout is set beyond libcurl's defaults.
//! A response counts as success only with a 2xx status and a body that is
//! non-empty after trimming.

mod error;

pub use error::FetchError;

use anyhow::{Context, Result};

const USER_AGENT: &str = concat!("scrapegen/", env!("CARGO_PKG_VERSION"));

/// Raw body text of a successful response; never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseArtifact(String);

impl ResponseArtifact {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Status code and undecoded body of a completed exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs the GET and collects the whole body.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get_blocking(url: &str) -> std::result::Result<RawResponse, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.useragent(USER_AGENT)?;

    let mut list = curl::easy::List::new();
    list.append("Accept: text/plain")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(RawResponse { status, body })
}

/// Applies the status check, then the emptiness check.
pub fn classify(response: RawResponse) -> std::result::Result<ResponseArtifact, FetchError> {
    let text = String::from_utf8_lossy(&response.body).into_owned();
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Transport {
            status: response.status,
            body: text,
        });
    }
    if text.trim().is_empty() {
        return Err(FetchError::EmptyResponse);
    }
    Ok(ResponseArtifact(text))
}

/// Fetches `url` and returns its text body.
///
/// Errors carry a [`FetchError`] (downcastable) unless the blocking task itself failed.
pub async fn fetch_text(url: &str) -> Result<ResponseArtifact> {
    let response = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || get_blocking(&url)
    })
    .await
    .context("fetch task join")?
    .map_err(FetchError::from)?;

    tracing::debug!(
        status = response.status,
        bytes = response.body.len(),
        "relay responded"
    );

    Ok(classify(response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u32, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn server_error_is_transport_error_with_body() {
        let err = classify(raw(500, "server error")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("500"), "{msg}");
        assert!(msg.contains("server error"), "{msg}");
        assert!(matches!(err, FetchError::Transport { status: 500, .. }));
    }

    #[test]
    fn not_found_with_empty_body_is_transport_error() {
        let err = classify(raw(404, "")).unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn status_checked_before_emptiness() {
        assert!(matches!(
            classify(raw(502, "   ")).unwrap_err(),
            FetchError::Transport { status: 502, .. }
        ));
    }

    #[test]
    fn ok_with_empty_or_blank_body_is_empty_response() {
        assert!(matches!(classify(raw(200, "")), Err(FetchError::EmptyResponse)));
        assert!(matches!(
            classify(raw(200, " \n\t ")),
            Err(FetchError::EmptyResponse)
        ));
    }

    #[test]
    fn ok_with_body_returns_untrimmed_text() {
        assert_eq!(classify(raw(200, "hello")).unwrap().as_str(), "hello");
        assert_eq!(
            classify(raw(204, "  rules\n")).unwrap().into_string(),
            "  rules\n"
        );
    }

    #[test]
    fn redirect_status_outside_success_range() {
        assert_eq!(classify(raw(301, "moved")).unwrap_err().status(), Some(301));
    }
}
