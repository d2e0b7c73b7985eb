//! Player statistics page: the sortable leaderboard from `/api/player-stats`.
//!
//! Sorting is a pure client-side transform. The sort runs over a defensive
//! copy with a stable comparator, so the fetched array is never reordered in
//! place and rows with equal keys keep their server order.

use std::cmp::Ordering;
use std::fmt;

use clap::ValueEnum;
use tracing::warn;

use super::resolve_api_url;
use crate::{
    api::{ApiClient, PlayerStatLine},
    fetch::{CancelToken, FetchScope, PageState},
    Result,
};

const FETCH_ERROR: &str = "Failed to fetch player stats";

/// Sortable columns of the stats table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Name,
    Team,
    Points,
    Rebounds,
    Assists,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Team => "team",
            SortKey::Points => "points",
            SortKey::Rebounds => "rebounds",
            SortKey::Assists => "assists",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Active sort column and direction.
///
/// Selecting a new column activates it descending; selecting the active
/// column again flips the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// The table opens sorted by points, best first.
    fn default() -> Self {
        Self {
            key: SortKey::Points,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column-header selection: toggle direction on the active column,
    /// otherwise switch to the new column descending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            *self = Self {
                key,
                direction: SortDirection::Desc,
            };
        }
    }

    fn compare(&self, a: &PlayerStatLine, b: &PlayerStatLine) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Team => a.team.to_lowercase().cmp(&b.team.to_lowercase()),
            SortKey::Points => a.points.total_cmp(&b.points),
            SortKey::Rebounds => a.rebounds.total_cmp(&b.rebounds),
            SortKey::Assists => a.assists.total_cmp(&b.assists),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Sorted copy of the rows; the input slice is left untouched.
    pub fn sorted(&self, rows: &[PlayerStatLine]) -> Vec<PlayerStatLine> {
        let mut sorted = rows.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

#[derive(Debug, Default)]
pub struct PlayerStatsPage {
    state: PageState<Vec<PlayerStatLine>>,
    sort: SortState,
}

impl PlayerStatsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(sort: SortState) -> Self {
        Self {
            state: PageState::new(),
            sort,
        }
    }

    pub fn state(&self) -> &PageState<Vec<PlayerStatLine>> {
        &self.state
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Column-header selection, as [`SortState::select`].
    pub fn select_column(&mut self, key: SortKey) {
        self.sort.select(key);
    }

    pub async fn load(&mut self, api: &ApiClient, token: &CancelToken) {
        let result = api.player_stats(token).await;
        if let Err(err) = &result {
            if !err.is_cancelled() {
                warn!(%err, "player stats fetch failed");
            }
        }
        self.state.resolve(result, FETCH_ERROR);
    }

    /// The rows in display order; pure derived view over the fetched array.
    pub fn sorted_rows(&self) -> Vec<PlayerStatLine> {
        match self.state.data() {
            Some(rows) => self.sort.sorted(rows),
            None => Vec::new(),
        }
    }

    fn header(&self, key: SortKey, label: &str) -> String {
        if self.sort.key == key {
            format!("{label} {}", self.sort.direction.marker())
        } else {
            label.to_string()
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            PageState::Loading => "Loading player statistics...".to_string(),
            PageState::Error(msg) => format!("⚠ Error loading player stats\n  {msg}"),
            PageState::Success(rows) => {
                if rows.is_empty() {
                    return "No player stats available.".to_string();
                }
                let mut out = String::from("Player Statistics\n=================\n");
                out.push_str(&format!(
                    "{:<24} {:<16} {:>10} {:>10} {:>10}\n",
                    self.header(SortKey::Name, "Player"),
                    self.header(SortKey::Team, "Team"),
                    self.header(SortKey::Points, "Points"),
                    self.header(SortKey::Rebounds, "Rebounds"),
                    self.header(SortKey::Assists, "Assists"),
                ));
                for row in self.sorted_rows() {
                    out.push_str(&format!(
                        "{:<24} {:<16} {:>10.1} {:>10.1} {:>10.1}\n",
                        row.name, row.team, row.points, row.rebounds, row.assists
                    ));
                }
                out
            }
        }
    }
}

/// Handle the `stats` command.
pub async fn handle_player_stats(
    api_url: Option<String>,
    sort: SortKey,
    ascending: bool,
    as_json: bool,
) -> Result<()> {
    let direction = if ascending {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };
    let api = ApiClient::new(resolve_api_url(api_url))?;
    let scope = FetchScope::new();

    let mut page = PlayerStatsPage::with_sort(SortState::new(sort, direction));
    if !as_json {
        println!("{}", page.render());
    }

    page.load(&api, scope.token()).await;

    match (as_json, page.state().data()) {
        (true, Some(_)) => println!("{}", serde_json::to_string_pretty(&page.sorted_rows())?),
        _ => println!("{}", page.render()),
    }
    Ok(())
}
