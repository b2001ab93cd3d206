// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Homes and their heating schedules.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::{HomeId, ScheduleId, UserId, convert};

/// A heating schedule defined for a home.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Schedule {
    /// Schedule identifier.
    pub id: ScheduleId,
    /// Display name.
    pub name: String,
    /// Whether new rooms follow this schedule.
    #[serde(rename = "default")]
    pub is_default: bool,
}

/// A home and its installation settings.
///
/// # Examples
///
/// ```
/// use istabai_lib::model::Home;
///
/// let json = r#"{
///     "id": 5, "name": "The Crumb Matrix", "address": null,
///     "boiler": false, "boiler_delay": true, "boiler_delay_timeout": "5",
///     "notifications": 117, "offline_mode": true, "owner_user_id": 10,
///     "rooms": 4, "schedules": [], "time_zone": "Europe/Bucharest"
/// }"#;
/// let home: Home = serde_json::from_str(json).unwrap();
/// assert_eq!(home.boiler_delay_timeout_seconds, 5);
/// assert!(home.address.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Home {
    /// Home identifier.
    pub id: HomeId,
    /// Display name.
    pub name: String,
    /// Postal address, if the owner entered one.
    #[serde(default)]
    pub address: Option<String>,
    /// Whether a boiler relay is installed.
    #[serde(rename = "boiler")]
    pub boiler_present: bool,
    /// Whether the boiler start is delayed.
    #[serde(rename = "boiler_delay")]
    pub boiler_delay_enabled: bool,
    /// Boiler start delay.
    #[serde(
        rename = "boiler_delay_timeout",
        deserialize_with = "convert::lenient_int::deserialize"
    )]
    pub boiler_delay_timeout_seconds: i64,
    /// Whether the home is configured with a boiler at all.
    #[serde(default)]
    pub has_boiler: bool,
    /// Number of unread notifications.
    #[serde(rename = "notifications")]
    pub notifications_count: i64,
    /// Number of active warnings.
    #[serde(rename = "warnings", default)]
    pub warnings_count: i64,
    /// Whether the home runs without a connection to the service.
    pub offline_mode: bool,
    /// The owning user.
    pub owner_user_id: UserId,
    /// Number of rooms in the home.
    #[serde(rename = "rooms")]
    pub room_count: i64,
    /// Last motion detected anywhere in the home.
    #[serde(
        rename = "last_motion",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub last_motion_at: Option<DateTime<Utc>>,
    /// Heating schedules, in the order the service lists them.
    pub schedules: Vec<Schedule>,
    /// IANA time zone name, e.g. `Europe/Bucharest`.
    pub time_zone: String,
}

impl Home {
    /// Returns the schedule marked as default, if any.
    #[must_use]
    pub fn default_schedule(&self) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.is_default)
    }

    /// Looks up a schedule by id.
    #[must_use]
    pub fn schedule(&self, id: ScheduleId) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.id == id)
    }
}
