//! Shared HTTP client for the source adapters
//!
//! Job boards reject default client identifiers, so every request goes out
//! with a realistic browser header set. The configuration is one immutable
//! value applied process-wide: adapters receive the built client at
//! construction and never tweak headers per request.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::{ScrapeError, ScrapeResult};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Immutable HTTP configuration shared by all adapters.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            accept: BROWSER_ACCEPT.to_string(),
            accept_language: BROWSER_ACCEPT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Thin wrapper around `reqwest::Client` with the shared header set applied.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("invalid user agent header")?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&config.accept).context("invalid accept header")?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .context("invalid accept-language header")?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .context("failed to build http client")?;

        Ok(Self { client })
    }

    /// GET a URL and return the body as text (HTML sources).
    pub async fn get_text(&self, url: &str) -> ScrapeResult<String> {
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response, url)?;
        let body = response.text().await?;
        debug!(url, bytes = body.len(), "fetched document");
        Ok(body)
    }

    /// GET a JSON endpoint and return the decoded payload.
    pub async fn get_json(&self, url: &str) -> ScrapeResult<Value> {
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response, url)?;
        let payload = response.json().await?;
        debug!(url, "fetched json payload");
        Ok(payload)
    }

    /// POST a fixed JSON body and return the decoded payload.
    ///
    /// Used by sources whose search endpoint is a paginated POST API.
    pub async fn post_json(&self, url: &str, body: &Value) -> ScrapeResult<Value> {
        let response = self.client.post(url).json(body).send().await?;
        let response = Self::check_status(response, url)?;
        let payload = response.json().await?;
        debug!(url, "fetched json payload via post");
        Ok(payload)
    }

    fn check_status(response: reqwest::Response, url: &str) -> ScrapeResult<reqwest::Response> {
        if !response.status().is_success() {
            return Err(ScrapeError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_default_config() {
        let config = HttpClientConfig::default();
        assert!(HttpClient::new(&config).is_ok());
    }

    #[test]
    fn default_config_uses_browser_identity_and_fixed_timeout() {
        let config = HttpClientConfig::default();
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.accept.contains("text/html"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    // `get_json` and `post_json` share the status gate and decode step;
    // drive both through constructed responses.

    #[test]
    fn non_success_status_is_rejected_before_decoding() {
        let raw = http::Response::builder()
            .status(429)
            .body("slow down")
            .unwrap();

        let err =
            HttpClient::check_status(reqwest::Response::from(raw), "https://larajobs.com/api/jobs")
                .unwrap_err();

        match err {
            ScrapeError::Status { status, url } => {
                assert_eq!(status, reqwest::StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(url, "https://larajobs.com/api/jobs");
            }
            other => panic!("expected a status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn successful_json_response_passes_the_gate_and_decodes() {
        let raw = http::Response::builder()
            .status(200)
            .header("content-type", "application/json")
            .body(r#"[{"slug":"laravel-developer"}]"#)
            .unwrap();

        let response =
            HttpClient::check_status(reqwest::Response::from(raw), "https://larajobs.com/api/jobs")
                .unwrap();
        let payload: Value = response.json().await.unwrap();
        assert!(payload.is_array());
    }
}
