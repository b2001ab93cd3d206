// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room operating modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a string does not name a [`TemperatureMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeParseError {
    input: String,
}

impl ModeParseError {
    /// Returns the input string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown temperature mode '{}' (expected one of DAY, NIGHT, ECO, TEMP, OFFLINE, BOOST)",
            self.input
        )
    }
}

impl std::error::Error for ModeParseError {}

/// The operating state that decides which target temperature a room follows.
///
/// Parsing is case-insensitive; the wire form is upper case.
///
/// # Examples
///
/// ```
/// use istabai_lib::types::TemperatureMode;
///
/// let mode: TemperatureMode = "eco".parse().unwrap();
/// assert_eq!(mode, TemperatureMode::Eco);
/// assert_eq!(mode.as_str(), "ECO");
///
/// assert!("holiday".parse::<TemperatureMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureMode {
    /// Daytime comfort temperature.
    Day,
    /// Night temperature.
    Night,
    /// Energy saving temperature.
    Eco,
    /// Temporary manual temperature.
    Temp,
    /// Temperature held while the home is offline.
    Offline,
    /// Time-limited override.
    Boost,
}

impl TemperatureMode {
    /// All modes, in wire order.
    pub const ALL: [Self; 6] = [
        Self::Day,
        Self::Night,
        Self::Eco,
        Self::Temp,
        Self::Offline,
        Self::Boost,
    ];

    /// Returns the upper-case name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Night => "NIGHT",
            Self::Eco => "ECO",
            Self::Temp => "TEMP",
            Self::Offline => "OFFLINE",
            Self::Boost => "BOOST",
        }
    }

    /// Returns `true` for [`TemperatureMode::Boost`].
    #[must_use]
    pub const fn is_boost(&self) -> bool {
        matches!(self, Self::Boost)
    }
}

impl fmt::Display for TemperatureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModeParseError {
                input: s.to_string(),
            })
    }
}

impl Serialize for TemperatureMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemperatureMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
