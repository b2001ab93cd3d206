// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer between the client and the Istabai service.
//!
//! The client only needs one thing from the network: issue a GET and hand
//! back the status code, content type and body. [`Transport`] is that seam;
//! [`HttpTransport`] implements it with `reqwest` when the `http` feature is
//! enabled, and tests or embedders can plug in their own.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use crate::error::TransportError;

/// Default public endpoint of the service.
pub const DEFAULT_BASE_URL: &str = "https://api.istabai.com";

/// A response as received from the transport, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// The response body.
    pub body: String,
}

impl RawResponse {
    /// Creates a new raw response.
    #[must_use]
    pub fn new(status: u16, content_type: Option<&str>, body: String) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body,
        }
    }
}

/// Trait for transports that can reach the Istabai service.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Returns the base URL requests are built against.
    fn base_url(&self) -> &str;

    /// Issues a GET request to `url` and returns the raw response.
    ///
    /// Non-200 status codes are not errors at this level; they are returned
    /// as-is for the classifier.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if no response was received.
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// Builds `<base><path>?k=v&...` with percent-encoded values.
pub(crate) fn build_url(base_url: &str, path: &str, query: &[(&str, String)]) -> String {
    let mut url = format!("{}{path}", base_url.trim_end_matches('/'));
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_without_query() {
        assert_eq!(
            build_url("https://api.istabai.com", "/2/homes.list.json", &[]),
            "https://api.istabai.com/2/homes.list.json"
        );
    }

    #[test]
    fn build_url_encodes_values() {
        let url = build_url(
            "https://api.istabai.com/",
            "/2/login.json",
            &[
                ("email", "some@email.com".to_string()),
                ("password", "p&ss w=rd".to_string()),
            ],
        );
        assert_eq!(
            url,
            "https://api.istabai.com/2/login.json?email=some%40email.com&password=p%26ss%20w%3Drd"
        );
    }
}
