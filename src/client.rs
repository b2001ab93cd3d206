// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for the Istabai API.
//!
//! The client holds the transport and the API key issued by the last
//! successful login. Every operation is a single request/response exchange;
//! nothing is cached and nothing runs in the background.

use std::fmt;
use std::time::Duration;

use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::command::{
    API_KEY_PARAM, Command, ListHomesCommand, ListRoomsCommand, LoginCommand,
    SetTemperatureCommand, UseScheduleCommand,
};
use crate::error::{Error, Result};
use crate::protocol::{Transport, build_url};
#[cfg(feature = "http")]
use crate::protocol::{HttpConfig, HttpTransport};
use crate::response::classify::{classify, decode};
use crate::response::{
    HomesResponse, LoginResult, RoomsResponse, SetTemperatureResponse, UseSchedulesResponse,
};
use crate::types::{HomeId, RoomId, TemperatureMode};

/// Client for the Istabai home heating API.
///
/// All operations take `&self`. Authenticated calls read the stored API key
/// when they start; a concurrent [`login`](Self::login) may or may not be
/// observed, and concurrent logins race with the last one winning. Callers
/// needing strict ordering must serialize logins themselves.
///
/// # Examples
///
/// ```no_run
/// use istabai_lib::IstabaiClient;
/// use istabai_lib::types::TemperatureMode;
/// use rust_decimal::Decimal;
///
/// # async fn example() -> istabai_lib::Result<()> {
/// let client = IstabaiClient::http("https://api.istabai.com")?;
///
/// let login = client.login(Some("me@example.com"), Some("secret"), None).await?;
/// if !login.success() {
///     return Ok(());
/// }
///
/// let homes = client.get_homes().await?;
/// for home in &homes.homes {
///     let rooms = client.get_rooms(home.id).await?;
///     for room in &rooms.rooms {
///         println!("{}: {}", room.name, room.current_temperature);
///     }
/// }
///
/// client
///     .set_temperature(istabai_lib::types::RoomId(204), TemperatureMode::Eco, Decimal::new(172, 1))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct IstabaiClient<T: Transport> {
    transport: T,
    api_key: RwLock<Option<String>>,
}

impl<T: Transport + fmt::Debug> fmt::Debug for IstabaiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IstabaiClient")
            .field("transport", &self.transport)
            .field("authenticated", &self.api_key.read().is_some())
            .finish()
    }
}

#[cfg(feature = "http")]
impl IstabaiClient<HttpTransport> {
    /// Creates a client for `base_url` with default HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// created.
    pub fn http(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(HttpConfig::new(base_url))
    }

    /// Creates a client from an [`HttpConfig`].
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_config(config: HttpConfig) -> Result<Self> {
        Ok(Self::new(config.into_transport()?))
    }
}

impl<T: Transport> IstabaiClient<T> {
    /// Creates an unauthenticated client on top of `transport`.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            api_key: RwLock::new(None),
        }
    }

    /// Resumes a session with a previously issued API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        *self.api_key.get_mut() = Some(api_key.into());
        self
    }

    /// Returns the API key used for authenticated calls, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        self.api_key.read().clone()
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a command and decodes its response.
    ///
    /// Authenticated commands carry the stored API key; without one the
    /// request is sent anyway and the service's rejection is classified.
    ///
    /// # Errors
    ///
    /// Returns the classified error if the request fails at the transport,
    /// status or body level, or the body cannot be decoded.
    pub async fn send<C: Command>(&self, command: &C) -> Result<C::Response> {
        let path = command.path();
        let mut query = command.query();
        if command.requires_api_key() {
            match self.api_key() {
                Some(key) => query.insert(0, (API_KEY_PARAM, key)),
                None => tracing::debug!(path, "No API key stored, sending unauthenticated"),
            }
        }

        let url = build_url(self.transport.base_url(), path, &query);

        tracing::debug!(path, "Sending request");
        let response = self.transport.get(&url).await?;
        tracing::debug!(path, status = response.status, "Received response");

        let json = classify(&response)?;
        decode(json)
    }

    /// Authenticates with either `username` and `password` or `api_key`.
    ///
    /// On success the issued API key is stored for later calls. Rejected
    /// credentials are reported as an unsuccessful [`LoginResult`] and leave
    /// the stored key untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidApiUsage` for an invalid argument combination,
    /// before any request is sent. Any failure other than rejected
    /// credentials is returned as-is.
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<LoginResult> {
        let command = LoginCommand::from_parts(username, password, api_key)?;

        match self.send(&command).await {
            Ok(response) => {
                *self.api_key.write() = Some(response.user.api_key.clone());
                tracing::info!(user_id = %response.user.id, homes = response.homes.len(), "Logged in");
                Ok(LoginResult::accepted(response))
            }
            Err(Error::InvalidUsernameOrPassword { message }) => {
                tracing::info!(message = %message, "Login rejected");
                Ok(LoginResult::rejected())
            }
            Err(e) => Err(e),
        }
    }

    /// Lists the homes of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the request.
    pub async fn get_homes(&self) -> Result<HomesResponse> {
        self.send(&ListHomesCommand).await
    }

    /// Lists the rooms of `home_id`.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the request.
    pub async fn get_rooms(&self, home_id: HomeId) -> Result<RoomsResponse> {
        self.send(&ListRoomsCommand::new(home_id)).await
    }

    /// Sets the target temperature of `mode` for a room.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidApiUsage` for [`TemperatureMode::Boost`]; use
    /// [`set_boost_temperature`](Self::set_boost_temperature) instead.
    /// Otherwise returns the classified error of the request.
    pub async fn set_temperature(
        &self,
        room_id: RoomId,
        mode: TemperatureMode,
        temperature: Decimal,
    ) -> Result<SetTemperatureResponse> {
        let command = SetTemperatureCommand::new(room_id, mode, temperature, None)?;
        self.send(&command).await
    }

    /// Boosts a room to `temperature` for `duration`.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the request.
    pub async fn set_boost_temperature(
        &self,
        room_id: RoomId,
        temperature: Decimal,
        duration: Duration,
    ) -> Result<SetTemperatureResponse> {
        self.send(&SetTemperatureCommand::boost(room_id, temperature, duration))
            .await
    }

    /// Cancels a running boost.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the request.
    pub async fn clear_boost(&self, room_id: RoomId) -> Result<SetTemperatureResponse> {
        self.send(&SetTemperatureCommand::clear_boost(room_id)).await
    }

    /// Turns schedule following on or off for a room.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the request.
    pub async fn use_schedules(&self, room_id: RoomId, enabled: bool) -> Result<UseSchedulesResponse> {
        self.send(&UseScheduleCommand::new(room_id, enabled)).await
    }
}
