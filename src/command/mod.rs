// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Istabai API command definitions.
//!
//! Each command knows its endpoint, its query parameters and the record its
//! response decodes into. Argument validation happens when a command is
//! constructed, so an invalid command never reaches the network.
//!
//! # Available Commands
//!
//! | Command Type | Endpoint | Response |
//! |-------------|----------|----------|
//! | [`LoginCommand`] | `/2/login.json` | [`LoginResponse`](crate::response::LoginResponse) |
//! | [`ListHomesCommand`] | `/2/homes.list.json` | [`HomesResponse`](crate::response::HomesResponse) |
//! | [`ListRoomsCommand`] | `/2/rooms.list.json` | [`RoomsResponse`](crate::response::RoomsResponse) |
//! | [`SetTemperatureCommand`] | `/2/rooms.set_temperature.json` | [`SetTemperatureResponse`](crate::response::SetTemperatureResponse) |
//! | [`UseScheduleCommand`] | `/2/rooms.use_schedule.json` | [`UseSchedulesResponse`](crate::response::UseSchedulesResponse) |
//!
//! # Examples
//!
//! ```
//! use istabai_lib::command::{Command, SetTemperatureCommand};
//! use istabai_lib::types::{RoomId, TemperatureMode};
//! use rust_decimal::Decimal;
//!
//! let cmd = SetTemperatureCommand::new(RoomId(204), TemperatureMode::Eco, Decimal::new(172, 1), None)
//!     .unwrap();
//! assert_eq!(cmd.path(), "/2/rooms.set_temperature.json");
//! assert!(cmd.query().contains(&("mode", "ECO".to_string())));
//! ```

mod list;
mod login;
mod schedule;
mod temperature;

pub use list::{ListHomesCommand, ListRoomsCommand};
pub use login::LoginCommand;
pub use schedule::UseScheduleCommand;
pub use temperature::SetTemperatureCommand;

use serde::de::DeserializeOwned;

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/2/login.json";
/// Path of the homes list endpoint.
pub const LIST_HOMES_PATH: &str = "/2/homes.list.json";
/// Path of the rooms list endpoint.
pub const LIST_ROOMS_PATH: &str = "/2/rooms.list.json";
/// Path of the set temperature endpoint.
pub const SET_TEMPERATURE_PATH: &str = "/2/rooms.set_temperature.json";
/// Path of the schedule toggle endpoint.
pub const USE_SCHEDULE_PATH: &str = "/2/rooms.use_schedule.json";

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api_key";

/// A request that can be sent to the Istabai API.
pub trait Command {
    /// The record a successful response decodes into.
    type Response: DeserializeOwned;

    /// Returns the endpoint path, relative to the base URL.
    fn path(&self) -> &'static str;

    /// Returns the query parameters, without the API key.
    fn query(&self) -> Vec<(&'static str, String)>;

    /// Whether the stored API key must be appended to the query.
    fn requires_api_key(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HomeId, RoomId};

    #[test]
    fn commands_target_their_endpoints() {
        assert_eq!(ListHomesCommand.path(), LIST_HOMES_PATH);
        assert_eq!(ListRoomsCommand::new(HomeId(5)).path(), LIST_ROOMS_PATH);
        assert_eq!(UseScheduleCommand::new(RoomId(1), true).path(), USE_SCHEDULE_PATH);
        assert_eq!(SetTemperatureCommand::clear_boost(RoomId(1)).path(), SET_TEMPERATURE_PATH);
    }

    #[test]
    fn only_login_skips_the_api_key() {
        let login = LoginCommand::from_parts(None, None, Some("key")).unwrap();
        assert!(!login.requires_api_key());
        assert!(ListHomesCommand.requires_api_key());
        assert!(UseScheduleCommand::new(RoomId(1), false).requires_api_key());
    }
}
