// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Top-level response bodies of each endpoint.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::model::{AuthenticatedUser, Home, Room};
use crate::types::{HomeId, RoomId, TemperatureMode, convert};

/// Body of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Server time of the response.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// The account that logged in.
    pub user: AuthenticatedUser,
    /// Homes the account can access.
    pub homes: Vec<Home>,
}

/// Body of the homes list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomesResponse {
    /// Server time of the response.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// Homes the account can access, in service order.
    pub homes: Vec<Home>,
}

impl HomesResponse {
    /// Looks up a home by id.
    #[must_use]
    pub fn home(&self, id: HomeId) -> Option<&Home> {
        self.homes.iter().find(|h| h.id == id)
    }
}

/// Body of the rooms list of one home.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomsResponse {
    /// Server time of the response.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// Rooms of the home, in service order.
    pub rooms: Vec<Room>,
    /// The home the rooms belong to.
    pub home: Home,
    /// Number of homes the account can access.
    pub home_count: i64,
}

impl RoomsResponse {
    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

#[derive(Deserialize)]
struct SetTemperatureEnvelope {
    set_temperature: SetTemperatureFields,
}

#[derive(Deserialize)]
struct SetTemperatureFields {
    room_id: RoomId,
    mode: TemperatureMode,
    #[serde(deserialize_with = "convert::decimal::deserialize")]
    temperature: Decimal,
}

/// Confirmation of a temperature change.
///
/// The service wraps the fields in a `set_temperature` object; the wrapper
/// is removed while decoding.
///
/// # Examples
///
/// ```
/// use istabai_lib::response::SetTemperatureResponse;
/// use istabai_lib::types::TemperatureMode;
///
/// let json = r#"{"set_temperature": {"room_id": 204, "mode": "ECO", "temperature": 17.2}}"#;
/// let response: SetTemperatureResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.mode, TemperatureMode::Eco);
/// assert_eq!(response.temperature.to_string(), "17.2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "SetTemperatureEnvelope")]
pub struct SetTemperatureResponse {
    /// The room that was changed.
    pub room_id: RoomId,
    /// The mode that was changed.
    pub mode: TemperatureMode,
    /// The temperature now set for that mode.
    pub temperature: Decimal,
}

impl From<SetTemperatureEnvelope> for SetTemperatureResponse {
    fn from(envelope: SetTemperatureEnvelope) -> Self {
        let SetTemperatureFields {
            room_id,
            mode,
            temperature,
        } = envelope.set_temperature;
        Self {
            room_id,
            mode,
            temperature,
        }
    }
}

/// Confirmation of a schedule toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UseSchedulesResponse {
    /// Whether the service applied the change.
    pub success: bool,
}
