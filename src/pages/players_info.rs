//! Player information page: biographies from `/api/player-info`.

use tracing::warn;

use super::resolve_api_url;
use crate::{
    api::{ApiClient, PlayerInfo},
    fetch::{CancelToken, FetchScope, PageState},
    Result,
};

/// Fixed banner for a non-2xx response on this page.
const FETCH_ERROR: &str = "Failed to fetch player data";

#[derive(Debug, Default)]
pub struct PlayersInfoPage {
    state: PageState<Vec<PlayerInfo>>,
}

impl PlayersInfoPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState<Vec<PlayerInfo>> {
        &self.state
    }

    /// Issue the page's single fetch and settle the state.
    pub async fn load(&mut self, api: &ApiClient, token: &CancelToken) {
        let result = api.player_info(token).await;
        if let Err(err) = &result {
            if !err.is_cancelled() {
                warn!(%err, "player info fetch failed");
            }
        }
        self.state.resolve(result, FETCH_ERROR);
    }

    /// Render exactly one of: loading placeholder, error banner, player list.
    pub fn render(&self) -> String {
        match &self.state {
            PageState::Loading => "Loading player information...".to_string(),
            PageState::Error(msg) => format!("⚠ {msg}"),
            PageState::Success(players) => {
                let mut out = String::from("Player Information\n==================\n");
                for player in players {
                    out.push_str(&format!(
                        "{} ({})\n  Position: {} | Height: {} | Weight: {}\n",
                        player.name, player.team, player.position, player.height, player.weight
                    ));
                }
                out
            }
        }
    }
}

/// Handle the `players` command.
pub async fn handle_players_info(api_url: Option<String>, as_json: bool) -> Result<()> {
    let api = ApiClient::new(resolve_api_url(api_url))?;
    let scope = FetchScope::new();

    let mut page = PlayersInfoPage::new();
    if !as_json {
        println!("{}", page.render());
    }

    page.load(&api, scope.token()).await;

    match (as_json, page.state().data()) {
        (true, Some(players)) => println!("{}", serde_json::to_string_pretty(players)?),
        _ => println!("{}", page.render()),
    }
    Ok(())
}
