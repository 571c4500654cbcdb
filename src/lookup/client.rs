//! Breach lookup client.

use crate::lookup::request::LookupRequest;
use crate::transport::Transport;
use crate::types::{LookupResult, PwnCheckError, Result};
use reqwest::StatusCode;
use tracing::{debug, trace};

/// Client for a single breach-lookup endpoint.
#[derive(Debug, Clone)]
pub struct BreachClient {
    transport: Transport,
    endpoint_url: String,
}

impl BreachClient {
    pub fn new(endpoint_url: impl Into<String>, transport: Transport) -> Self {
        Self {
            transport,
            endpoint_url: endpoint_url.into(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// The URL a lookup for `email` is sent to.
    pub fn request_url(&self, email: &str) -> String {
        LookupRequest::new(self.endpoint_url.as_str(), email).url()
    }

    /// Check whether `email` appears in any known breach.
    ///
    /// Sends exactly one GET request. A 404 means the email is not listed,
    /// a 200 carries the JSON array of breach site names. A 400 is reported
    /// as [`PwnCheckError::InvalidEmail`], any other status as
    /// [`PwnCheckError::UnexpectedResponse`].
    pub async fn check_email(&self, email: &str) -> Result<LookupResult> {
        let url = self.request_url(email);
        trace!("Checking breaches: {}", url);

        let response = self
            .transport
            .client()
            .get(&url)
            .send()
            .await
            .map_err(PwnCheckError::Transport)?;

        let status = response.status();
        debug!("Breach lookup for {} returned HTTP {}", email, status);

        match status {
            StatusCode::OK => {
                let body = response.text().await.map_err(PwnCheckError::Transport)?;
                let sites = parse_breach_sites(&body)?;
                debug!("{} found in {} breaches", email, sites.len());
                Ok(LookupResult::Breached { sites })
            }
            StatusCode::NOT_FOUND => Ok(LookupResult::NotBreached),
            StatusCode::BAD_REQUEST => Err(PwnCheckError::InvalidEmail {
                email: email.to_string(),
            }),
            other => Err(PwnCheckError::UnexpectedResponse {
                status: other.as_u16(),
            }),
        }
    }
}

/// Decode a lookup response body as a JSON array of site names.
pub fn parse_breach_sites(body: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str::<Vec<String>>(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn make_client(endpoint_url: &str) -> BreachClient {
        BreachClient::new(endpoint_url, Transport::from_client(reqwest::Client::new()))
    }

    #[test]
    fn test_client_accessors() {
        let client = make_client("http://test");
        assert_eq!(client.endpoint_url(), "http://test");
        assert!(!client.transport().verifies_peer());
    }

    #[test]
    fn test_request_url_without_trailing_slash() {
        let client = make_client("http://test");
        assert_eq!(client.request_url("foo@bar.com"), "http://test/foo%40bar.com");
    }

    #[test]
    fn test_request_url_with_trailing_slash() {
        let client = make_client("http://test/");
        assert_eq!(client.request_url("foo@bar.com"), "http://test/foo%40bar.com");
    }

    #[test]
    fn test_parse_breach_sites() {
        let sites = parse_breach_sites(r#"["foo","bar","baz"]"#).unwrap();
        assert_eq!(sites, vec!["foo", "bar", "baz"]);

        assert!(parse_breach_sites("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_breach_sites_rejects_other_shapes() {
        for body in ["invalid response format", "", "{\"Name\":\"Adobe\"}", "[1, 2]", "\"Adobe\""] {
            match parse_breach_sites(body) {
                Err(PwnCheckError::InvalidResponseFormat(_)) => {}
                other => panic!("Expected InvalidResponseFormat for {:?}, got {:?}", body, other),
            }
        }
    }

    #[tokio::test]
    async fn test_check_email_breached() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path_contains("/api/breachedaccount/foo")
                    .path_contains("bar.com");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(r#"["foo","bar","baz"]"#);
            })
            .await;

        let client = make_client(&server.url("/api/breachedaccount"));
        let result = client.check_email("foo@bar.com").await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            LookupResult::Breached {
                sites: vec!["foo".to_string(), "bar".to_string(), "baz".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_check_email_not_breached() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path_contains("bar.com");
                then.status(404).body("Not found");
            })
            .await;

        let client = make_client(&server.base_url());
        let result = client.check_email("foo@bar.com").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, LookupResult::NotBreached);
    }
}
