// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response handling for the Istabai JSON API.
//!
//! [`classify`] turns a raw HTTP response into either a JSON body or a typed
//! [`Error`](crate::Error); [`classify::decode`] maps that body onto one of
//! the records below.

pub mod classify;
mod login;
mod records;

pub use login::LoginResult;
pub use records::{
    HomesResponse, LoginResponse, RoomsResponse, SetTemperatureResponse, UseSchedulesResponse,
};
