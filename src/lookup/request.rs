//! Lookup URL construction.

use url::form_urlencoded;

/// A single lookup target: the endpoint base URL and the email to append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub base_url: String,
    pub email: String,
}

impl LookupRequest {
    pub fn new(base_url: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            email: email.into(),
        }
    }

    /// Full request URL, with exactly one `/` between base URL and email.
    pub fn url(&self) -> String {
        let separator = if self.base_url.ends_with('/') { "" } else { "/" };
        format!("{}{}{}", self.base_url, separator, encode_email(&self.email))
    }
}

/// Form-urlencode an email: space becomes `+`, hex digits are uppercase.
/// Only alphanumerics and `-_.` stay unescaped, so `*` becomes `%2A`.
pub fn encode_email(email: &str) -> String {
    form_urlencoded::byte_serialize(email.as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
}

/// Pick the base URL matching the transport mode.
pub fn select_endpoint<'a>(use_tls: bool, plain_url: &'a str, ssl_url: &'a str) -> &'a str {
    if use_tls {
        ssl_url
    } else {
        plain_url
    }
}
