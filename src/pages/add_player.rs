//! Create-player form: POSTs a new player to `/api/players`.
//!
//! The form distinguishes four outcomes with exact banner strings: success,
//! endpoint not found (404), any other HTTP failure, and a network-level
//! failure where no response arrived at all. It never updates any list page;
//! the created record lives server-side only.

use reqwest::StatusCode;
use tracing::{info, warn};

use super::resolve_api_url;
use crate::{
    api::{ApiClient, NewPlayer},
    Result,
};

pub const MSG_SUCCESS: &str = "Player created successfully!";
pub const MSG_NOT_FOUND: &str =
    "Error 404: API endpoint not found. The /api/players route does not exist.";
pub const MSG_NETWORK: &str = "Network error: Failed to connect to the server";

/// Banner for a non-404 HTTP failure.
pub fn http_failure_message(status: StatusCode) -> String {
    format!("Error {}: Failed to create player", status.as_u16())
}

/// Outcome banner shown after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Success(msg) | Banner::Error(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Banner::Success(_))
    }
}

/// The three free-text fields plus submission state.
#[derive(Debug, Default)]
pub struct AddPlayerForm {
    pub name: String,
    pub position: String,
    pub team: String,
    banner: Option<Banner>,
    submitting: bool,
}

impl AddPlayerForm {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            team: team.into(),
            banner: None,
            submitting: false,
        }
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// POST the form, setting exactly one banner.
    ///
    /// Re-entry while a submission is in flight is refused, mirroring the
    /// disabled submit control. On success the fields are cleared.
    pub async fn submit(&mut self, api: &ApiClient) {
        if self.submitting {
            return;
        }
        self.submitting = true;
        self.banner = None;

        let body = NewPlayer {
            name: self.name.clone(),
            position: self.position.clone(),
            team: self.team.clone(),
        };

        self.banner = Some(match api.create_player(&body).await {
            Ok(()) => {
                info!(name = %body.name, "player created");
                self.name.clear();
                self.position.clear();
                self.team.clear();
                Banner::Success(MSG_SUCCESS.to_string())
            }
            Err(err) => {
                warn!(%err, "create player failed");
                Banner::Error(match err.status() {
                    Some(StatusCode::NOT_FOUND) => MSG_NOT_FOUND.to_string(),
                    Some(status) => http_failure_message(status),
                    None => MSG_NETWORK.to_string(),
                })
            }
        });
        self.submitting = false;
    }
}

/// Handle the `add-player` command.
pub async fn handle_add_player(
    api_url: Option<String>,
    name: String,
    position: String,
    team: String,
) -> Result<()> {
    let api = ApiClient::new(resolve_api_url(api_url))?;

    let mut form = AddPlayerForm::new(name, position, team);
    println!("Creating...");
    form.submit(&api).await;

    match form.banner() {
        Some(banner) if banner.is_success() => println!("✓ {}", banner.message()),
        Some(banner) => println!("⚠ {}", banner.message()),
        None => {}
    }
    Ok(())
}
