// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boost state of a room.
//!
//! The service encodes an inactive boost as the boolean `false` and an
//! active one as a plain number, so the same field can hold
//! `false`, `20.5` or `1707712076`. Both unions are decoded into explicit
//! two-variant enums so an inactive boost never looks like "active at 0".

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::types::convert::decimal_from_f64;

/// Target temperature of the boost mode.
///
/// # Examples
///
/// ```
/// use istabai_lib::types::BoostTemperature;
/// use rust_decimal::Decimal;
///
/// let off: BoostTemperature = serde_json::from_str("false").unwrap();
/// assert!(!off.is_active());
///
/// let on: BoostTemperature = serde_json::from_str("20.5").unwrap();
/// assert_eq!(on.temperature(), Some(Decimal::new(205, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoostTemperature {
    /// No boost is configured.
    #[default]
    Inactive,
    /// Boost is configured with this temperature.
    Active(Decimal),
}

impl BoostTemperature {
    /// Returns `true` if a boost temperature is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Returns the boost temperature, if active.
    #[must_use]
    pub const fn temperature(&self) -> Option<Decimal> {
        match self {
            Self::Active(temperature) => Some(*temperature),
            Self::Inactive => None,
        }
    }
}

/// End of an active boost.
///
/// # Examples
///
/// ```
/// use istabai_lib::types::BoostUntil;
///
/// let off: BoostUntil = serde_json::from_str("false").unwrap();
/// assert_eq!(off, BoostUntil::Inactive);
///
/// let on: BoostUntil = serde_json::from_str("1707712076").unwrap();
/// assert_eq!(on.until().unwrap().timestamp(), 1_707_712_076);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoostUntil {
    /// No boost is running.
    #[default]
    Inactive,
    /// Boost runs until this instant.
    Active(DateTime<Utc>),
}

impl BoostUntil {
    /// Returns `true` if a boost is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Returns the end of the boost, if active.
    #[must_use]
    pub const fn until(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Active(until) => Some(*until),
            Self::Inactive => None,
        }
    }
}

/// Accepts `false` only; `true` has no meaning for these fields.
fn inactive_from_bool<E: de::Error>(value: bool, expected: &dyn de::Expected) -> Result<(), E> {
    if value {
        Err(E::invalid_value(de::Unexpected::Bool(true), expected))
    } else {
        Ok(())
    }
}

struct BoostTemperatureVisitor;

impl Visitor<'_> for BoostTemperatureVisitor {
    type Value = BoostTemperature;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("false or a temperature")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        inactive_from_bool(value, &self).map(|()| BoostTemperature::Inactive)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(BoostTemperature::Active(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(BoostTemperature::Active(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        decimal_from_f64(value).map(BoostTemperature::Active)
    }
}

impl<'de> Deserialize<'de> for BoostTemperature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BoostTemperatureVisitor)
    }
}

struct BoostUntilVisitor;

impl Visitor<'_> for BoostUntilVisitor {
    type Value = BoostUntil;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("false or a unix timestamp in seconds")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        inactive_from_bool(value, &self).map(|()| BoostUntil::Inactive)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        DateTime::from_timestamp(value, 0)
            .map(BoostUntil::Active)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let seconds = i64::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))?;
        self.visit_i64(seconds)
    }
}

impl<'de> Deserialize<'de> for BoostUntil {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BoostUntilVisitor)
    }
}
