// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the data model and the commands.
//!
//! # Types
//!
//! - [`TemperatureMode`] - Day/Night/Eco/Temp/Offline/Boost
//! - [`BoostTemperature`] - `false` or a boost target temperature
//! - [`BoostUntil`] - `false` or the end of a running boost
//! - [`HomeId`], [`RoomId`], [`ScheduleId`], [`UserId`] - typed identifiers
//!
//! Temperatures are exact decimals ([`rust_decimal::Decimal`]) and instants
//! are [`chrono::DateTime<Utc>`](chrono::DateTime).

mod boost;
pub mod convert;
mod ids;
mod mode;

pub use boost::{BoostTemperature, BoostUntil};
pub use ids::{HomeId, RoomId, ScheduleId, UserId};
pub use mode::{ModeParseError, TemperatureMode};
