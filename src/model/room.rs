// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rooms, their thermostat device and per-mode target temperatures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::UsageError;
use crate::types::{BoostTemperature, BoostUntil, RoomId, ScheduleId, TemperatureMode, convert};

/// Target temperature configured for each mode of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RoomSetTemperatures {
    /// Day mode target.
    #[serde(deserialize_with = "convert::decimal::deserialize")]
    pub day: Decimal,
    /// Night mode target.
    #[serde(deserialize_with = "convert::decimal::deserialize")]
    pub night: Decimal,
    /// Eco mode target.
    #[serde(deserialize_with = "convert::decimal::deserialize")]
    pub eco: Decimal,
    /// Temporary mode target.
    #[serde(deserialize_with = "convert::decimal::deserialize")]
    pub temp: Decimal,
    /// Offline mode target.
    #[serde(deserialize_with = "convert::decimal::deserialize")]
    pub offline: Decimal,
    /// Boost target, only present while a boost is configured.
    pub boost: BoostTemperature,
}

impl RoomSetTemperatures {
    /// Returns the scalar target for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::BoostHasNoScalarTarget`] for
    /// [`TemperatureMode::Boost`]; read [`RoomSetTemperatures::boost`]
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use istabai_lib::model::RoomSetTemperatures;
    /// use istabai_lib::types::TemperatureMode;
    /// use rust_decimal::Decimal;
    ///
    /// let json = r#"{"day": 23.5, "night": 23, "eco": 15, "temp": 19,
    ///                "offline": 23, "boost": false}"#;
    /// let set: RoomSetTemperatures = serde_json::from_str(json).unwrap();
    /// assert_eq!(set.get(TemperatureMode::Day).unwrap(), Decimal::new(235, 1));
    /// assert!(set.get(TemperatureMode::Boost).is_err());
    /// ```
    pub fn get(&self, mode: TemperatureMode) -> Result<Decimal, UsageError> {
        match mode {
            TemperatureMode::Day => Ok(self.day),
            TemperatureMode::Night => Ok(self.night),
            TemperatureMode::Eco => Ok(self.eco),
            TemperatureMode::Temp => Ok(self.temp),
            TemperatureMode::Offline => Ok(self.offline),
            TemperatureMode::Boost => Err(UsageError::BoostHasNoScalarTarget),
        }
    }
}

/// The thermostat installed in a room.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceInfo {
    /// Whether the device reports a fault.
    pub faulty: bool,
    /// Battery charge as a fraction between 0 and 1.
    #[serde(rename = "battery", deserialize_with = "convert::decimal::deserialize")]
    pub battery_level: Decimal,
    /// Whether the device is charging.
    pub charging: bool,
    /// Radio signal strength as a fraction between 0 and 1.
    #[serde(rename = "signal", deserialize_with = "convert::decimal::deserialize")]
    pub signal_level: Decimal,
    /// Last time the device reported data.
    #[serde(rename = "last_data", with = "chrono::serde::ts_seconds")]
    pub last_data_at: DateTime<Utc>,
}

/// Target temperature for the mode a room is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetTemperature {
    /// A regular mode with a scalar target.
    Scalar(Decimal),
    /// The room is boosting.
    Boost(BoostTemperature),
}

/// A room with its current readings and thermostat settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Room {
    /// Room identifier.
    pub id: RoomId,
    /// Whether the authenticated user may only read this room.
    pub read_only: bool,
    /// Display name.
    pub name: String,
    /// Measured temperature.
    #[serde(rename = "temperature", deserialize_with = "convert::decimal::deserialize")]
    pub current_temperature: Decimal,
    /// Lowest target the room accepts.
    #[serde(deserialize_with = "convert::decimal::deserialize")]
    pub min_temperature: Decimal,
    /// Highest target the room accepts.
    #[serde(deserialize_with = "convert::decimal::deserialize")]
    pub max_temperature: Decimal,
    /// Target temperature per mode.
    #[serde(rename = "set_temperature")]
    pub set_temperatures: RoomSetTemperatures,
    /// Relative humidity in percent.
    #[serde(rename = "humidity")]
    pub humidity_percent: i64,
    /// The installed thermostat.
    pub device: DeviceInfo,
    /// Last motion detected in the room.
    #[serde(rename = "last_motion", default, with = "chrono::serde::ts_seconds_option")]
    pub last_motion_at: Option<DateTime<Utc>>,
    /// Whether a motion sensor is installed.
    pub has_motion_sensor: bool,
    /// Whether the motion sensor is armed.
    #[serde(default)]
    pub motion_sensor_armed: bool,
    /// Whether the device is a water sensor rather than a thermostat.
    #[serde(rename = "is_water")]
    pub is_water_sensor: bool,
    /// Whether the room follows its schedule.
    pub on_schedule: bool,
    /// End of the running boost.
    pub boost_until: BoostUntil,
    /// When the room returns to normal operation after a boost.
    pub boost_until_normal: BoostUntil,
    /// The mode the room is currently in.
    pub mode: TemperatureMode,
    /// The schedule the room follows.
    pub active_schedule_id: ScheduleId,
}

impl Room {
    /// Returns the target temperature of the room's current mode.
    #[must_use]
    pub fn target_temperature(&self) -> TargetTemperature {
        match self.set_temperatures.get(self.mode) {
            Ok(temperature) => TargetTemperature::Scalar(temperature),
            Err(_) => TargetTemperature::Boost(self.set_temperatures.boost),
        }
    }

    /// Returns `true` while a boost is running.
    #[must_use]
    pub fn is_boosting(&self) -> bool {
        self.boost_until.is_active()
    }
}
