// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field conversions applied while decoding service responses.
//!
//! Each submodule is meant for `#[serde(deserialize_with = "...")]`.
//! Timestamps use `chrono::serde::ts_seconds` directly.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserializer;
use serde::de::{self, Visitor};

/// Builds an exact decimal from a JSON number.
///
/// Floats go through their shortest round-trip text (`0.91` stays `0.91`)
/// instead of the binary expansion of the `f64`.
pub(crate) fn decimal_from_f64<E: de::Error>(value: f64) -> Result<Decimal, E> {
    let text = value.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&format!("{value:e}")))
        .map_err(|e| E::custom(format!("number {text} is not representable as a decimal: {e}")))
}

pub(crate) struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a numeric literal")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        decimal_from_f64(value)
    }
}

/// Numeric literal to [`Decimal`].
pub mod decimal {
    use super::{Decimal, DecimalVisitor, Deserializer};

    /// Deserializes a JSON number into an exact decimal.
    ///
    /// # Errors
    ///
    /// Fails on anything that is not a number.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

/// Integer that the service sometimes sends as a string (`"5"`).
pub mod lenient_int {
    use super::{Deserializer, Visitor, de, fmt};

    struct LenientIntVisitor;

    impl Visitor<'_> for LenientIntVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer or a string holding an integer")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            i64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    /// Deserializes an integer given either as a number or as a string.
    ///
    /// # Errors
    ///
    /// Fails on floats, booleans and non-numeric strings.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(LenientIntVisitor)
    }
}
