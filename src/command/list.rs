// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only list commands.

use crate::command::{Command, LIST_HOMES_PATH, LIST_ROOMS_PATH};
use crate::response::{HomesResponse, RoomsResponse};
use crate::types::HomeId;

/// Lists the homes of the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListHomesCommand;

impl Command for ListHomesCommand {
    type Response = HomesResponse;

    fn path(&self) -> &'static str {
        LIST_HOMES_PATH
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Lists the rooms of one home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRoomsCommand {
    home_id: HomeId,
}

impl ListRoomsCommand {
    /// Creates the command for `home_id`.
    #[must_use]
    pub const fn new(home_id: HomeId) -> Self {
        Self { home_id }
    }

    /// Returns the home whose rooms are listed.
    #[must_use]
    pub const fn home_id(&self) -> HomeId {
        self.home_id
    }
}

impl Command for ListRoomsCommand {
    type Response = RoomsResponse;

    fn path(&self) -> &'static str {
        LIST_ROOMS_PATH
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("home_id", self.home_id.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_homes_has_no_parameters() {
        assert!(ListHomesCommand.query().is_empty());
    }

    #[test]
    fn list_rooms_sends_home_id() {
        let cmd = ListRoomsCommand::new(HomeId(2525));
        assert_eq!(cmd.query(), vec![("home_id", "2525".to_string())]);
        assert_eq!(cmd.home_id(), HomeId(2525));
    }
}
