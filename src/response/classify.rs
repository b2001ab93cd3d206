// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of raw responses.
//!
//! Every response passes two checks before it is decoded:
//!
//! | Stage | Input | Outcome |
//! |-------|-------|---------|
//! | status | 300 | [`Error::InvalidApiKey`] |
//! | status | 100 | [`Error::Unavailable`] |
//! | status | 203 | [`Error::InvalidRequest`] |
//! | status | other non-200 | [`Error::UnexpectedStatusCode`] |
//! | body | non-JSON content type | [`Error::UnexpectedResponse`] |
//! | body | `error.code == 401` | [`Error::InvalidUsernameOrPassword`] |
//! | body | any other `error` member | [`Error::Generic`] |
//!
//! Anything else is handed to [`decode`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, ErrorCode, ParseError, Result};
use crate::protocol::RawResponse;

/// Embedded error code reporting rejected credentials.
pub const INVALID_CREDENTIALS_CODE: i64 = 401;

/// Maps the HTTP status code to an error, if it is not 200.
///
/// # Errors
///
/// Returns the error matching the status code.
pub fn check_status(response: &RawResponse) -> Result<()> {
    let body = || response.body.clone();
    match response.status {
        200 => Ok(()),
        300 => Err(Error::InvalidApiKey { body: body() }),
        100 => Err(Error::Unavailable { body: body() }),
        203 => Err(Error::InvalidRequest { body: body() }),
        code => {
            tracing::warn!(status = code, "Unexpected HTTP status code");
            Err(Error::UnexpectedStatusCode { code, body: body() })
        }
    }
}

/// Parses the body as JSON and rejects embedded error payloads.
///
/// # Errors
///
/// Returns [`Error::UnexpectedResponse`] if the body is not JSON, or the
/// error matching an embedded `error` member.
pub fn check_body(response: &RawResponse) -> Result<Value> {
    if !is_json(response.content_type.as_deref()) {
        return Err(ParseError::NotJson {
            content_type: response.content_type.clone(),
        }
        .into());
    }

    let json: Value = serde_json::from_str(&response.body).map_err(ParseError::Json)?;

    match json.get("error") {
        Some(error) => Err(embedded_error(error)),
        None => Ok(json),
    }
}

/// Runs both checks.
///
/// # Errors
///
/// See [`check_status`] and [`check_body`].
pub fn classify(response: &RawResponse) -> Result<Value> {
    check_status(response)?;
    check_body(response)
}

/// Decodes a classified body into a typed record.
///
/// # Errors
///
/// Returns [`ParseError::Decode`] with the path of the first field that is
/// missing or cannot be converted.
pub fn decode<T: DeserializeOwned>(json: Value) -> Result<T> {
    serde_path_to_error::deserialize(json).map_err(|e| {
        let path = e.path().to_string();
        Error::UnexpectedResponse(ParseError::Decode {
            path,
            source: e.into_inner(),
        })
    })
}

/// Matches `application/json`, ignoring parameters such as `charset`.
fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn embedded_error(error: &Value) -> Error {
    // Only an integer 401 marks rejected credentials; a string "401" stays generic.
    let rejected_credentials =
        error.get("code").and_then(Value::as_i64) == Some(INVALID_CREDENTIALS_CODE);
    let code = error
        .get("code")
        .and_then(|c| c.as_i64().or_else(|| c.as_str()?.trim().parse().ok()))
        .map_or(ErrorCode::Unknown, ErrorCode::Code);
    let message = error
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    tracing::warn!(code = %code, message = %message, "API returned an error payload");

    if rejected_credentials {
        Error::InvalidUsernameOrPassword { message }
    } else {
        Error::Generic { code, message }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn json_response(status: u16, body: &Value) -> RawResponse {
        RawResponse::new(status, Some("application/json"), body.to_string())
    }

    #[test]
    fn status_table() {
        let body = json!({});
        let cases: [(u16, fn(&Error) -> bool); 8] = [
            (300, |e| matches!(e, Error::InvalidApiKey { .. })),
            (100, |e| matches!(e, Error::Unavailable { .. })),
            (203, |e| matches!(e, Error::InvalidRequest { .. })),
            (500, |e| matches!(e, Error::UnexpectedStatusCode { code: 500, .. })),
            (404, |e| matches!(e, Error::UnexpectedStatusCode { code: 404, .. })),
            (401, |e| matches!(e, Error::UnexpectedStatusCode { code: 401, .. })),
            (403, |e| matches!(e, Error::UnexpectedStatusCode { code: 403, .. })),
            (400, |e| matches!(e, Error::UnexpectedStatusCode { code: 400, .. })),
        ];

        for (status, expected) in cases {
            let err = classify(&json_response(status, &body)).unwrap_err();
            assert!(expected(&err), "status {status} gave {err:?}");
        }
    }

    #[test]
    fn unexpected_status_keeps_raw_body() {
        let response = RawResponse::new(502, Some("text/html"), "<h1>Bad gateway</h1>".to_string());
        match classify(&response).unwrap_err() {
            Error::UnexpectedStatusCode { code, body } => {
                assert_eq!(code, 502);
                assert_eq!(body, "<h1>Bad gateway</h1>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_stage_runs_before_body_stage() {
        let response = RawResponse::new(300, Some("text/plain"), "nope".to_string());
        assert!(matches!(
            classify(&response).unwrap_err(),
            Error::InvalidApiKey { .. }
        ));
    }

    #[test]
    fn plain_text_is_unexpected_response() {
        let response = RawResponse::new(200, Some("text/plain"), "{\"timestamp\": 1}".to_string());
        assert!(matches!(
            classify(&response).unwrap_err(),
            Error::UnexpectedResponse(ParseError::NotJson { .. })
        ));

        let response = RawResponse::new(200, None, "{}".to_string());
        assert!(matches!(
            classify(&response).unwrap_err(),
            Error::UnexpectedResponse(ParseError::NotJson { content_type: None })
        ));
    }

    #[test]
    fn json_content_type_with_charset_is_accepted() {
        let response = RawResponse::new(
            200,
            Some("application/json; charset=utf-8"),
            "{\"success\": true}".to_string(),
        );
        assert_eq!(classify(&response).unwrap(), json!({"success": true}));
    }

    #[test]
    fn malformed_json_is_unexpected_response() {
        let response = RawResponse::new(200, Some("application/json"), "{not json".to_string());
        assert!(matches!(
            classify(&response).unwrap_err(),
            Error::UnexpectedResponse(ParseError::Json(_))
        ));
    }

    #[test]
    fn embedded_401_is_invalid_credentials() {
        let body = json!({"error": {"code": 401, "description": "Invalid email or password."}});
        match classify(&json_response(200, &body)).unwrap_err() {
            Error::InvalidUsernameOrPassword { message } => {
                assert_eq!(message, "Invalid email or password.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn embedded_errors_table() {
        let cases = [
            (json!({"code": 300, "description": "some exception"}), ErrorCode::Code(300), "some exception"),
            (json!({"code": 500, "description": "server crash"}), ErrorCode::Code(500), "server crash"),
            (json!({"code": "42", "description": "string code"}), ErrorCode::Code(42), "string code"),
            (json!({"code": "401", "description": "string 401"}), ErrorCode::Code(401), "string 401"),
            (json!({"description": "no code"}), ErrorCode::Unknown, "no code"),
            (json!({"code": 12}), ErrorCode::Code(12), "unknown"),
            (json!({}), ErrorCode::Unknown, "unknown"),
            (json!("flat string"), ErrorCode::Unknown, "unknown"),
        ];

        for (error, expected_code, expected_message) in cases {
            let body = json!({ "error": error });
            match classify(&json_response(200, &body)).unwrap_err() {
                Error::Generic { code, message } => {
                    assert_eq!(code, expected_code);
                    assert_eq!(message, expected_message);
                }
                other => panic!("unexpected error for {body}: {other:?}"),
            }
        }
    }

    #[test]
    fn decode_reports_field_path() {
        let body = json!({"set_temperature": {"room_id": 1, "mode": "SUMMER", "temperature": 20}});
        let err = decode::<crate::response::SetTemperatureResponse>(body).unwrap_err();
        match err {
            Error::UnexpectedResponse(ParseError::Decode { path, .. }) => {
                assert_eq!(path, "set_temperature.mode");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_missing_field() {
        let err = decode::<crate::response::UseSchedulesResponse>(json!({})).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedResponse(ParseError::Decode { .. })
        ));
    }
}
