//! Teams page: franchises from `/api/teams` with client-side search.
//!
//! The filtered list is a pure derived view over {search term, fetched
//! array}; neither input is mutated, and the view recomputes whenever
//! either changes.

use tracing::warn;

use super::resolve_api_url;
use crate::{
    api::{ApiClient, Team},
    fetch::{CancelToken, FetchScope, PageState},
    Result,
};

const FETCH_ERROR: &str = "Failed to fetch team data";

/// Teams whose name OR city contains the trimmed, lowercased term.
///
/// An empty or whitespace-only term yields the full list.
pub fn filter_teams<'a>(teams: &'a [Team], term: &str) -> Vec<&'a Team> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return teams.iter().collect();
    }
    teams
        .iter()
        .filter(|team| {
            team.name.to_lowercase().contains(&needle)
                || team.city.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct TeamsPage {
    state: PageState<Vec<Team>>,
    search: String,
}

impl TeamsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(term: impl Into<String>) -> Self {
        Self {
            state: PageState::new(),
            search: term.into(),
        }
    }

    pub fn state(&self) -> &PageState<Vec<Team>> {
        &self.state
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub async fn load(&mut self, api: &ApiClient, token: &CancelToken) {
        let result = api.teams(token).await;
        if let Err(err) = &result {
            if !err.is_cancelled() {
                warn!(%err, "team fetch failed");
            }
        }
        self.state.resolve(result, FETCH_ERROR);
    }

    /// The visible teams under the current search term.
    pub fn visible(&self) -> Vec<&Team> {
        match self.state.data() {
            Some(teams) => filter_teams(teams, &self.search),
            None => Vec::new(),
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            PageState::Loading => "Loading teams...".to_string(),
            PageState::Error(msg) => format!("⚠ Error loading teams\n  {msg}"),
            PageState::Success(_) => {
                let visible = self.visible();
                if visible.is_empty() {
                    let trimmed = self.search.trim();
                    return if trimmed.is_empty() {
                        "No teams available.".to_string()
                    } else {
                        format!("No teams match \"{trimmed}\"")
                    };
                }
                let mut out = String::from("NBA Teams\n=========\n");
                for team in visible {
                    out.push_str(&format!(
                        "{} ({}) [{}]\n",
                        team.name, team.city, team.conference
                    ));
                }
                out
            }
        }
    }
}

/// Handle the `teams` command.
pub async fn handle_teams(
    api_url: Option<String>,
    search: Option<String>,
    as_json: bool,
) -> Result<()> {
    let api = ApiClient::new(resolve_api_url(api_url))?;
    let scope = FetchScope::new();

    let mut page = TeamsPage::with_search(search.unwrap_or_default());
    if !as_json {
        println!("{}", page.render());
    }

    page.load(&api, scope.token()).await;

    match (as_json, page.state().data()) {
        (true, Some(_)) => println!("{}", serde_json::to_string_pretty(&page.visible())?),
        _ => println!("{}", page.render()),
    }
    Ok(())
}
