// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Login command.

use std::fmt;

use crate::command::{API_KEY_PARAM, Command, LOGIN_PATH};
use crate::error::UsageError;
use crate::response::LoginResponse;

/// Authenticates with either an email/password pair or an existing API key.
///
/// # Examples
///
/// ```
/// use istabai_lib::command::LoginCommand;
/// use istabai_lib::error::UsageError;
///
/// assert!(LoginCommand::from_parts(Some("me@example.com"), Some("secret"), None).is_ok());
/// assert!(LoginCommand::from_parts(None, None, Some("api-key")).is_ok());
///
/// assert_eq!(
///     LoginCommand::from_parts(Some("me@example.com"), None, None).unwrap_err(),
///     UsageError::IncompleteCredentials,
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum LoginCommand {
    /// Email and password.
    Credentials {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },
    /// A previously issued API key.
    ApiKey(String),
}

impl LoginCommand {
    /// Builds the command from the optional login arguments.
    ///
    /// Rules are checked in order and the first violation wins:
    /// an API key together with any credential, nothing at all, then only
    /// one half of the credentials. Empty strings count as present.
    ///
    /// # Errors
    ///
    /// Returns the `UsageError` of the first violated rule.
    pub fn from_parts(
        username: Option<&str>,
        password: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Self, UsageError> {
        match (username, password, api_key) {
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => Err(UsageError::CredentialsAndApiKey),
            (None, None, None) => Err(UsageError::MissingCredentials),
            (Some(_), None, None) | (None, Some(_), None) => Err(UsageError::IncompleteCredentials),
            (None, None, Some(key)) => Ok(Self::ApiKey(key.to_string())),
            (Some(email), Some(password), None) => Ok(Self::Credentials {
                email: email.to_string(),
                password: password.to_string(),
            }),
        }
    }
}

// Credentials and keys stay out of logs.
impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credentials { email, .. } => f
                .debug_struct("Credentials")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
        }
    }
}

impl Command for LoginCommand {
    type Response = LoginResponse;

    fn path(&self) -> &'static str {
        LOGIN_PATH
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Credentials { email, password } => {
                vec![("email", email.clone()), ("password", password.clone())]
            }
            Self::ApiKey(key) => vec![(API_KEY_PARAM, key.clone())],
        }
    }

    fn requires_api_key(&self) -> bool {
        false
    }
}
