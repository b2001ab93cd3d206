// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Istabai client.
//!
//! The service reports failures through two independent channels: the HTTP
//! status code and an `{"error": {...}}` object embedded in an otherwise
//! successful JSON body. Both are folded into the single [`Error`] enum so
//! callers match on one type regardless of where the failure came from.

use std::fmt;

use thiserror::Error;

/// The root error type for every client operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The call was made with arguments the API cannot accept.
    ///
    /// Raised before any request is sent.
    #[error("invalid API usage: {0}")]
    InvalidApiUsage(#[from] UsageError),

    /// The service rejected the API key (HTTP 300).
    #[error("invalid API key")]
    InvalidApiKey {
        /// Raw response body.
        body: String,
    },

    /// The service is temporarily unavailable (HTTP 100).
    #[error("service unavailable")]
    Unavailable {
        /// Raw response body.
        body: String,
    },

    /// The service reported missing or malformed parameters (HTTP 203).
    #[error("invalid request")]
    InvalidRequest {
        /// Raw response body.
        body: String,
    },

    /// Any other non-200 status code.
    #[error("unexpected status code {code}")]
    UnexpectedStatusCode {
        /// The HTTP status code.
        code: u16,
        /// Raw response body.
        body: String,
    },

    /// The body was not JSON or did not match the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(#[from] ParseError),

    /// The embedded error code 401: the credentials were rejected.
    #[error("invalid username or password: {message}")]
    InvalidUsernameOrPassword {
        /// The description sent by the service.
        message: String,
    },

    /// Any other embedded error code.
    #[error("API error {code}: {message}")]
    Generic {
        /// The embedded error code.
        code: ErrorCode,
        /// The description sent by the service.
        message: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Returns `true` when the failure means the caller has to authenticate
    /// again, either with a fresh API key or with other credentials.
    #[must_use]
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey { .. } | Self::InvalidUsernameOrPassword { .. }
        )
    }
}

/// Errors raised for malformed call arguments.
///
/// The `Display` output is the exact message callers surface to users.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// `login` was given an API key together with a username or password.
    #[error("Either send api_key or credentials not both")]
    CredentialsAndApiKey,

    /// `login` was given nothing to authenticate with.
    #[error("You must send either the credentials or the api key")]
    MissingCredentials,

    /// `login` was given only one half of the username/password pair.
    #[error("When sending the credentials you must provide both the username and password")]
    IncompleteCredentials,

    /// Boost mode was requested without a duration.
    #[error("Boost mode requires a duration")]
    BoostWithoutDuration,

    /// A duration was given for a mode other than boost.
    #[error("Duration not allowed in any other mode than boost")]
    DurationOutsideBoost,

    /// Boost has no single scalar target temperature.
    #[error("Boost temperature is not a scalar, read it from the boost field")]
    BoostHasNoScalarTarget,

    /// A configuration value could not be used.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised while turning a response body into a typed record.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response was not declared as JSON.
    #[error("expected a JSON response, got content type {}", .content_type.as_deref().unwrap_or("<none>"))]
    NotJson {
        /// The `Content-Type` header value, if any.
        content_type: Option<String>,
    },

    /// The body could not be parsed as JSON at all.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON did not match the expected record.
    #[error("failed to decode {path}: {source}")]
    Decode {
        /// Path of the offending field, e.g. `rooms[2].boost_until`.
        path: String,
        /// The underlying conversion failure.
        source: serde_json::Error,
    },
}

/// Errors raised by the transport before a response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL cannot be used to build requests.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Code carried by an embedded error payload.
///
/// The service normally sends an integer; a payload without one is kept as
/// [`ErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A numeric code sent by the service.
    Code(i64),
    /// The payload did not carry a usable code.
    Unknown,
}

impl ErrorCode {
    /// Returns the numeric code, if the service sent one.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Code(code) => Some(code),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_messages() {
        assert_eq!(
            UsageError::CredentialsAndApiKey.to_string(),
            "Either send api_key or credentials not both"
        );
        assert_eq!(
            UsageError::MissingCredentials.to_string(),
            "You must send either the credentials or the api key"
        );
        assert_eq!(
            UsageError::IncompleteCredentials.to_string(),
            "When sending the credentials you must provide both the username and password"
        );
        assert_eq!(
            UsageError::BoostWithoutDuration.to_string(),
            "Boost mode requires a duration"
        );
        assert_eq!(
            UsageError::DurationOutsideBoost.to_string(),
            "Duration not allowed in any other mode than boost"
        );
    }

    #[test]
    fn error_from_usage_error() {
        let err: Error = UsageError::MissingCredentials.into();
        assert!(matches!(
            err,
            Error::InvalidApiUsage(UsageError::MissingCredentials)
        ));
    }

    #[test]
    fn generic_error_display() {
        let err = Error::Generic {
            code: ErrorCode::Code(500),
            message: "server crash".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: server crash");

        let err = Error::Generic {
            code: ErrorCode::Unknown,
            message: "unknown".to_string(),
        };
        assert_eq!(err.to_string(), "API error unknown: unknown");
    }

    #[test]
    fn not_json_display() {
        let err = ParseError::NotJson {
            content_type: Some("text/plain".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "expected a JSON response, got content type text/plain"
        );
    }

    #[test]
    fn authentication_failures() {
        assert!(
            Error::InvalidApiKey {
                body: String::new()
            }
            .is_authentication_failure()
        );
        assert!(
            Error::InvalidUsernameOrPassword {
                message: "Invalid email or password.".to_string()
            }
            .is_authentication_failure()
        );
        assert!(
            !Error::Unavailable {
                body: String::new()
            }
            .is_authentication_failure()
        );
    }
}
