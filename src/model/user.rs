// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;

use crate::types::UserId;

/// The account that logged in.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticatedUser {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Preferred language code, e.g. `EN`.
    #[serde(rename = "lang")]
    pub language: String,
    /// Key to authenticate subsequent calls.
    pub api_key: String,
    /// Number of homes the user can access.
    #[serde(rename = "homes", default)]
    pub home_count: i64,
}

// The API key stays out of logs.
impl std::fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("language", &self.language)
            .field("api_key", &"<redacted>")
            .field("home_count", &self.home_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_user() {
        let user: AuthenticatedUser = serde_json::from_value(serde_json::json!({
            "api_key": "some-secret-api-key",
            "homes": 1,
            "id": 10,
            "lang": "EN",
            "name": "Fluffy Bread"
        }))
        .unwrap();
        assert_eq!(user.id, UserId(10));
        assert_eq!(user.language, "EN");
        assert_eq!(user.api_key, "some-secret-api-key");
        assert_eq!(user.home_count, 1);
    }

    #[test]
    fn debug_hides_api_key() {
        let user = AuthenticatedUser {
            id: UserId(10),
            name: "Fluffy Bread".to_string(),
            language: "EN".to_string(),
            api_key: "some-secret-api-key".to_string(),
            home_count: 1,
        };
        let debug = format!("{user:?}");
        assert!(!debug.contains("some-secret-api-key"));
        assert!(debug.contains("Fluffy Bread"));
    }
}
