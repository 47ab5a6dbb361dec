// SPDX-License-Identifier: MPL-2.0
//! Client for the remote image-scraping service.
//!
//! The service exposes a single operation: `POST <endpoint>` with a JSON body
//! `{ "url": <page url> }`, answered by `{ "images": [<image url>, ...] }`.
//! A reply without an `images` field means the page contained no images and
//! is not an error.

pub mod download;

use crate::error::FetchError;
use serde::{Deserialize, Serialize};

/// User agent sent on every outbound request.
const USER_AGENT: &str = concat!("WebGrab/", env!("CARGO_PKG_VERSION"));

/// Request body for the scraping endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequest {
    pub url: String,
}

/// Response body from the scraping endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeResponse {
    /// Ordered image URLs extracted from the page. Absent means empty.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Raw bytes of a fetched image plus its decoded dimensions.
///
/// The original bytes are kept so the GUI can hand them to its own decoder;
/// decoding here only validates the data and measures it.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub url: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Parses a scrape response body.
///
/// # Errors
///
/// Returns `FetchError::MalformedResponse` when the body is not a JSON object.
pub fn parse_response(body: &str) -> Result<Vec<String>, FetchError> {
    let response: ScrapeResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    Ok(response.images)
}

/// HTTP client for the scraping endpoint and the images it points at.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ScrapeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ScrapeClient {
    /// Creates a client aimed at the given endpoint.
    ///
    /// No request timeout is configured: a hung request keeps the loading
    /// indicator active rather than failing behind the user's back.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Like [`ScrapeClient::new`] but falls back to a stock HTTP client when
    /// the tuned builder fails, so app startup never dies on TLS init.
    #[must_use]
    pub fn new_or_default(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        match Self::new(endpoint.clone()) {
            Ok(client) => client,
            Err(_) => Self {
                http: reqwest::Client::new(),
                endpoint,
            },
        }
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Re-aims the client at a different endpoint, keeping the connection pool.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    /// Access to the shared HTTP client for related transfers (downloads).
    #[must_use]
    pub fn http(&self) -> reqwest::Client {
        self.http.clone()
    }

    /// Asks the scraping service for all image URLs on `page_url`.
    ///
    /// Exactly one request is issued per call; retries and caching are the
    /// caller's concern (and deliberately absent from this application).
    ///
    /// # Errors
    ///
    /// Returns a categorized `FetchError` on network failure, non-success
    /// status, or a malformed response body.
    pub async fn fetch_images(&self, page_url: String) -> Result<Vec<String>, FetchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ScrapeRequest { url: page_url })
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        parse_response(&body)
    }

    /// Fetches one scraped image and validates that it decodes.
    ///
    /// # Errors
    ///
    /// Returns a categorized `FetchError` on network failure, non-success
    /// status, or undecodable image data.
    pub async fn fetch_image_bytes(&self, image_url: String) -> Result<FetchedImage, FetchError> {
        let response = self
            .http
            .get(&image_url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?
            .to_vec();

        let decoded = image_rs::load_from_memory(&bytes)
            .map_err(|e| FetchError::InvalidImage(e.to_string()))?;

        Ok(FetchedImage {
            url: image_url,
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_preserves_order() {
        let body = r#"{"images": ["a.png", "b.png"]}"#;
        let images = parse_response(body).unwrap();
        assert_eq!(images, vec!["a.png".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn parse_response_missing_images_field_is_empty() {
        let images = parse_response("{}").unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn parse_response_extra_fields_are_ignored() {
        let body = r#"{"images": ["x.jpg"], "elapsed_ms": 120}"#;
        let images = parse_response(body).unwrap();
        assert_eq!(images, vec!["x.jpg".to_string()]);
    }

    #[test]
    fn parse_response_rejects_non_object_body() {
        let err = parse_response("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn parse_response_rejects_invalid_json() {
        let err = parse_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn request_serializes_to_expected_wire_shape() {
        let request = ScrapeRequest {
            url: "https://example.com".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com"}"#);
    }

    #[test]
    fn client_reports_configured_endpoint() {
        let client = ScrapeClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }

    #[test]
    fn set_endpoint_replaces_target() {
        let mut client = ScrapeClient::new("http://localhost:8080").unwrap();
        client.set_endpoint("http://localhost:9090/scrape");
        assert_eq!(client.endpoint(), "http://localhost:9090/scrape");
    }
}
