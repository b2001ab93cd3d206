// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Records decoded from the service.
//!
//! Every record is decoded fresh from a response and owned by the caller.
//! Field names follow Rust conventions; the wire names are mapped with serde
//! attributes, and members the service sends but the client does not model
//! (`features`, `location`, ...) are ignored.

mod home;
mod room;
mod user;

pub use home::{Home, Schedule};
pub use room::{DeviceInfo, Room, RoomSetTemperatures, TargetTemperature};
pub use user::AuthenticatedUser;
