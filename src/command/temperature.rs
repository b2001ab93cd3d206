// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature commands.
//!
//! Plain set-points, boosts and boost cancellation all go through the same
//! endpoint; they only differ in mode and duration.

use std::time::Duration;

use rust_decimal::Decimal;

use crate::command::{Command, SET_TEMPERATURE_PATH};
use crate::error::UsageError;
use crate::response::SetTemperatureResponse;
use crate::types::{RoomId, TemperatureMode};

/// Sets the target temperature of one mode of a room.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use istabai_lib::command::{Command, SetTemperatureCommand};
/// use istabai_lib::error::UsageError;
/// use istabai_lib::types::{RoomId, TemperatureMode};
/// use rust_decimal::Decimal;
///
/// // Boost for 42 seconds
/// let boost = SetTemperatureCommand::boost(RoomId(7629), Decimal::from(19), Duration::from_secs(42));
/// assert!(boost.query().contains(&("duration", "42".to_string())));
///
/// // Boost without a duration is rejected
/// let err = SetTemperatureCommand::new(RoomId(7629), TemperatureMode::Boost, Decimal::from(19), None);
/// assert_eq!(err.unwrap_err(), UsageError::BoostWithoutDuration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTemperatureCommand {
    room_id: RoomId,
    mode: TemperatureMode,
    temperature: Decimal,
    duration: Option<Duration>,
}

impl SetTemperatureCommand {
    /// Temperature sent when cancelling a boost; the service ignores it.
    pub const CLEAR_BOOST_TEMPERATURE: Decimal = Decimal::ONE;

    /// Creates a command, checking that a duration is given for boost and
    /// only for boost.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::BoostWithoutDuration` or
    /// `UsageError::DurationOutsideBoost`.
    pub fn new(
        room_id: RoomId,
        mode: TemperatureMode,
        temperature: Decimal,
        duration: Option<Duration>,
    ) -> Result<Self, UsageError> {
        match (mode.is_boost(), duration) {
            (true, None) => Err(UsageError::BoostWithoutDuration),
            (false, Some(_)) => Err(UsageError::DurationOutsideBoost),
            _ => Ok(Self {
                room_id,
                mode,
                temperature,
                duration,
            }),
        }
    }

    /// Creates a boost to `temperature` lasting `duration`.
    ///
    /// The duration is sent in whole seconds, rounded up so that only a zero
    /// duration reaches the service as a cancellation.
    #[must_use]
    pub const fn boost(room_id: RoomId, temperature: Decimal, duration: Duration) -> Self {
        Self {
            room_id,
            mode: TemperatureMode::Boost,
            temperature,
            duration: Some(duration),
        }
    }

    /// Creates the command that cancels a running boost.
    ///
    /// The service treats a zero-length boost as cancellation.
    #[must_use]
    pub const fn clear_boost(room_id: RoomId) -> Self {
        Self::boost(room_id, Self::CLEAR_BOOST_TEMPERATURE, Duration::ZERO)
    }

    /// Returns the target room.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Returns the mode being changed.
    #[must_use]
    pub const fn mode(&self) -> TemperatureMode {
        self.mode
    }

    /// Returns the requested temperature.
    #[must_use]
    pub const fn temperature(&self) -> Decimal {
        self.temperature
    }

    /// Returns the boost duration, if any.
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

impl Command for SetTemperatureCommand {
    type Response = SetTemperatureResponse;

    fn path(&self) -> &'static str {
        SET_TEMPERATURE_PATH
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("room_id", self.room_id.to_string()),
            ("temperature", self.temperature.normalize().to_string()),
            ("mode", self.mode.as_str().to_string()),
        ];
        if let Some(duration) = self.duration {
            query.push(("duration", whole_seconds(duration).to_string()));
        }
        query
    }
}

// Zero is the cancel-boost signal; a partial second must not collapse to it.
fn whole_seconds(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_table() {
        let t = Decimal::from(20);
        let minute = Some(Duration::from_secs(60));
        let room = RoomId(1);

        for mode in TemperatureMode::ALL {
            let without = SetTemperatureCommand::new(room, mode, t, None);
            let with = SetTemperatureCommand::new(room, mode, t, minute);
            if mode.is_boost() {
                assert_eq!(without.unwrap_err(), UsageError::BoostWithoutDuration);
                assert!(with.is_ok());
            } else {
                assert!(without.is_ok());
                assert_eq!(with.unwrap_err(), UsageError::DurationOutsideBoost);
            }
        }
    }

    #[test]
    fn plain_query_has_no_duration() {
        let cmd =
            SetTemperatureCommand::new(RoomId(204), TemperatureMode::Eco, Decimal::new(172, 1), None)
                .unwrap();
        assert_eq!(
            cmd.query(),
            vec![
                ("room_id", "204".to_string()),
                ("temperature", "17.2".to_string()),
                ("mode", "ECO".to_string()),
            ]
        );
    }

    #[test]
    fn temperature_is_normalized() {
        let cmd =
            SetTemperatureCommand::new(RoomId(1), TemperatureMode::Day, Decimal::new(2150, 2), None)
                .unwrap();
        assert!(cmd.query().contains(&("temperature", "21.5".to_string())));
    }

    #[test]
    fn boost_query_has_duration_in_seconds() {
        let cmd = SetTemperatureCommand::boost(
            RoomId(7629),
            Decimal::from(19),
            Duration::from_millis(42_900),
        );
        assert!(cmd.query().contains(&("mode", "BOOST".to_string())));
        assert!(cmd.query().contains(&("duration", "43".to_string())));
    }

    #[test]
    fn sub_second_boost_is_not_a_cancellation() {
        let duration_of = |cmd: &SetTemperatureCommand| {
            cmd.query()
                .into_iter()
                .find(|(key, _)| *key == "duration")
                .map(|(_, value)| value)
        };

        let boost =
            SetTemperatureCommand::boost(RoomId(7), Decimal::from(22), Duration::from_millis(900));
        let clear = SetTemperatureCommand::clear_boost(RoomId(7));

        assert_eq!(duration_of(&boost).as_deref(), Some("1"));
        assert_eq!(duration_of(&clear).as_deref(), Some("0"));
        assert_ne!(boost.query(), clear.query());
    }

    #[test]
    fn whole_second_durations_are_sent_unchanged() {
        let cmd =
            SetTemperatureCommand::boost(RoomId(7), Decimal::from(22), Duration::from_secs(1800));
        assert!(cmd.query().contains(&("duration", "1800".to_string())));
    }

    #[test]
    fn clear_boost_uses_sentinel() {
        let cmd = SetTemperatureCommand::clear_boost(RoomId(7629));
        assert_eq!(cmd.mode(), TemperatureMode::Boost);
        assert_eq!(cmd.temperature(), Decimal::ONE);
        assert_eq!(cmd.duration(), Some(Duration::ZERO));
        assert_eq!(
            cmd.query(),
            vec![
                ("room_id", "7629".to_string()),
                ("temperature", "1".to_string()),
                ("mode", "BOOST".to_string()),
                ("duration", "0".to_string()),
            ]
        );
    }
}
