// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `istabai_lib` - A Rust client for the Istabai home heating API.
//!
//! This library authenticates against the Istabai cloud, reads homes and
//! rooms, and changes room temperatures, turning the service's loosely typed
//! JSON into strongly typed records.
//!
//! # Supported Operations
//!
//! - **Authentication**: email/password or an existing API key
//! - **Homes**: list homes with their schedules and boiler settings
//! - **Rooms**: list rooms with readings, per-mode targets and boost state
//! - **Temperature control**: set a mode's target, boost, cancel a boost
//! - **Schedules**: make a room follow or ignore its schedule
//!
//! # Error Model
//!
//! The service reports failures through HTTP status codes *and* through
//! `{"error": {...}}` payloads inside successful responses. Both end up in
//! [`Error`]. The one exception is rejected credentials during
//! [`IstabaiClient::login`], which is reported as an unsuccessful
//! [`LoginResult`].
//!
//! # Quick Start
//!
//! ```no_run
//! use istabai_lib::IstabaiClient;
//! use istabai_lib::types::{RoomId, TemperatureMode};
//! use rust_decimal::Decimal;
//! use std::time::Duration;
//!
//! # async fn example() -> istabai_lib::Result<()> {
//! let client = IstabaiClient::http("https://api.istabai.com")?;
//!
//! let login = client.login(Some("me@example.com"), Some("secret"), None).await?;
//! assert!(login.success());
//!
//! let homes = client.get_homes().await?;
//! let rooms = client.get_rooms(homes.homes[0].id).await?;
//! for room in &rooms.rooms {
//!     let day = room.set_temperatures.get(TemperatureMode::Day)?;
//!     println!("{} is at {} (day target {day})", room.name, room.current_temperature);
//! }
//!
//! // Boost the office for half an hour, then cancel it.
//! client
//!     .set_boost_temperature(RoomId(204), Decimal::new(215, 1), Duration::from_secs(1800))
//!     .await?;
//! client.clear_boost(RoomId(204)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The library emits `tracing` events and never installs a subscriber.
//! Query strings are not logged since they carry credentials.

mod client;
pub mod command;
pub mod error;
pub mod model;
pub mod protocol;
pub mod response;
pub mod types;

pub use client::IstabaiClient;
pub use command::{
    Command, ListHomesCommand, ListRoomsCommand, LoginCommand, SetTemperatureCommand,
    UseScheduleCommand,
};
pub use error::{Error, ErrorCode, ParseError, Result, TransportError, UsageError};
pub use model::{
    AuthenticatedUser, DeviceInfo, Home, Room, RoomSetTemperatures, Schedule, TargetTemperature,
};
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpTransport};
pub use protocol::{RawResponse, Transport};
pub use response::{
    HomesResponse, LoginResponse, LoginResult, RoomsResponse, SetTemperatureResponse,
    UseSchedulesResponse,
};
pub use types::{
    BoostTemperature, BoostUntil, HomeId, RoomId, ScheduleId, TemperatureMode, UserId,
};
