// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::command::{Command, USE_SCHEDULE_PATH};
use crate::response::UseSchedulesResponse;
use crate::types::RoomId;

/// Turns schedule following on or off for a room.
///
/// # Examples
///
/// ```
/// use istabai_lib::command::{Command, UseScheduleCommand};
/// use istabai_lib::types::RoomId;
///
/// let cmd = UseScheduleCommand::new(RoomId(7398), true);
/// assert!(cmd.query().contains(&("use_schedule", "1".to_string())));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseScheduleCommand {
    room_id: RoomId,
    enabled: bool,
}

impl UseScheduleCommand {
    /// Creates the command.
    #[must_use]
    pub const fn new(room_id: RoomId, enabled: bool) -> Self {
        Self { room_id, enabled }
    }
}

impl Command for UseScheduleCommand {
    type Response = UseSchedulesResponse;

    fn path(&self) -> &'static str {
        USE_SCHEDULE_PATH
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let flag = if self.enabled { "1" } else { "0" };
        vec![
            ("room_id", self.room_id.to_string()),
            ("use_schedule", flag.to_string()),
        ]
    }
}
