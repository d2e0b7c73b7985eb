//! HTTP client for the NBA reference backend.
//!
//! One method per endpoint. Every GET threads a [`CancelToken`] through the
//! request: the token is checked before the request is sent and again before
//! the decoded body is returned, so a response that lands after page
//! teardown comes back as `Cancelled` and is discarded by the caller.

use reqwest::{header::CONTENT_TYPE, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{NewPlayer, PlayerInfo, PlayerStatLine, Stadium, StadiumsResponse, Team};
use crate::{error::CourtsideError, fetch::CancelToken, Result};

/// Client bound to one backend base URL.
///
/// The base URL is injected rather than hard-coded so tests can point the
/// client at a local mock server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent("courtside/0.1").build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &CancelToken) -> Result<T> {
        token.ensure_live()?;

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CourtsideError::Status { status });
        }

        let data = response.json::<T>().await?;

        // The page may have been torn down while the response was in flight;
        // its result must not be applied.
        token.ensure_live()?;
        Ok(data)
    }

    /// Fetch player biographies from `/api/player-info`.
    pub async fn player_info(&self, token: &CancelToken) -> Result<Vec<PlayerInfo>> {
        self.get_json("/api/player-info", token).await
    }

    /// Fetch the stat leaderboard from `/api/player-stats`.
    pub async fn player_stats(&self, token: &CancelToken) -> Result<Vec<PlayerStatLine>> {
        self.get_json("/api/player-stats", token).await
    }

    /// Fetch franchises from `/api/teams`.
    pub async fn teams(&self, token: &CancelToken) -> Result<Vec<Team>> {
        self.get_json("/api/teams", token).await
    }

    /// Fetch arenas from `/api/stadiums`, unwrapping the `stadiums` envelope.
    pub async fn stadiums(&self, token: &CancelToken) -> Result<Vec<Stadium>> {
        let response: StadiumsResponse = self.get_json("/api/stadiums", token).await?;
        Ok(response.stadiums)
    }

    /// POST a new player to `/api/players`.
    ///
    /// Returns `Ok(())` on any 2xx. Non-2xx statuses come back as
    /// [`CourtsideError::Status`] so the form can tell 404 apart from other
    /// failures; a transport error means no response arrived at all.
    pub async fn create_player(&self, player: &NewPlayer) -> Result<()> {
        let url = format!("{}/api/players", self.base_url);
        debug!(%url, name = %player.name, "POST");

        let response = self.http.post(&url).json(player).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CourtsideError::Status { status });
        }
        Ok(())
    }
}
