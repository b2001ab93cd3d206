// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outcome of a login attempt.

use crate::response::LoginResponse;

/// Result of [`IstabaiClient::login`](crate::IstabaiClient::login).
///
/// Rejected credentials are an expected outcome of logging in, so they are
/// reported here rather than as an error. A successful result always carries
/// both the API key and the full response; a rejected one carries neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    response: Option<Box<LoginResponse>>,
}

impl LoginResult {
    /// Creates a successful result from the decoded login body.
    #[must_use]
    pub fn accepted(response: LoginResponse) -> Self {
        Self {
            response: Some(Box::new(response)),
        }
    }

    /// Creates the result for rejected credentials.
    #[must_use]
    pub const fn rejected() -> Self {
        Self { response: None }
    }

    /// Returns `true` if the service accepted the credentials.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.response.is_some()
    }

    /// Returns the API key issued by the service.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.response.as_ref().map(|r| r.user.api_key.as_str())
    }

    /// Returns the full login body.
    #[must_use]
    pub fn full_response(&self) -> Option<&LoginResponse> {
        self.response.as_deref()
    }

    /// Consumes the result, returning the full login body.
    #[must_use]
    pub fn into_response(self) -> Option<LoginResponse> {
        self.response.map(|r| *r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_has_no_key_or_response() {
        let result = LoginResult::rejected();
        assert!(!result.success());
        assert!(result.api_key().is_none());
        assert!(result.full_response().is_none());
        assert!(result.into_response().is_none());
    }

    #[test]
    fn accepted_exposes_user_key() {
        let response: LoginResponse = serde_json::from_value(serde_json::json!({
            "timestamp": 1_678_044_952,
            "user": {"api_key": "key-1", "homes": 0, "id": 10, "lang": "EN", "name": "Fluffy Bread"},
            "homes": []
        }))
        .unwrap();

        let result = LoginResult::accepted(response);
        assert!(result.success());
        assert_eq!(result.api_key(), Some("key-1"));
        assert_eq!(result.full_response().unwrap().user.name, "Fluffy Bread");
    }
}
