//! Stadiums page: arenas from `/api/stadiums`.
//!
//! The only endpoint that wraps its list in an envelope; the client unwraps
//! it so this page works with a plain `Vec<Stadium>` like the others.

use tracing::warn;

use super::{format_thousands, resolve_api_url};
use crate::{
    api::{ApiClient, Stadium},
    fetch::{CancelToken, FetchScope, PageState},
    Result,
};

const FETCH_ERROR: &str = "Failed to fetch stadium data";

#[derive(Debug, Default)]
pub struct StadiumsPage {
    state: PageState<Vec<Stadium>>,
}

impl StadiumsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState<Vec<Stadium>> {
        &self.state
    }

    pub async fn load(&mut self, api: &ApiClient, token: &CancelToken) {
        let result = api.stadiums(token).await;
        if let Err(err) = &result {
            if !err.is_cancelled() {
                warn!(%err, "stadium fetch failed");
            }
        }
        self.state.resolve(result, FETCH_ERROR);
    }

    pub fn render(&self) -> String {
        match &self.state {
            PageState::Loading => "Loading stadiums...".to_string(),
            PageState::Error(msg) => format!("⚠ Error loading stadiums\n  {msg}"),
            PageState::Success(stadiums) => {
                let mut out = String::from("NBA Stadiums\n============\n");
                for stadium in stadiums {
                    out.push_str(&format!(
                        "{} ({})\n  Location: {} | Capacity: {} | Opened: {}\n",
                        stadium.name,
                        stadium.team,
                        stadium.location,
                        format_thousands(stadium.capacity),
                        stadium.opened
                    ));
                }
                out
            }
        }
    }
}

/// Handle the `stadiums` command.
pub async fn handle_stadiums(api_url: Option<String>, as_json: bool) -> Result<()> {
    let api = ApiClient::new(resolve_api_url(api_url))?;
    let scope = FetchScope::new();

    let mut page = StadiumsPage::new();
    if !as_json {
        println!("{}", page.render());
    }

    page.load(&api, scope.token()).await;

    match (as_json, page.state().data()) {
        (true, Some(stadiums)) => println!("{}", serde_json::to_string_pretty(stadiums)?),
        _ => println!("{}", page.render()),
    }
    Ok(())
}
