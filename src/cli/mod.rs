//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};

use crate::pages::player_stats::SortKey;

/// Arguments shared by every subcommand.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Backend base URL (or set `COURTSIDE_API_URL` env var).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Output the fetched data as JSON instead of formatted text.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "courtside", about = "NBA reference dashboard CLI")]
pub struct Courtside {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List player biographies (team, position, height, weight).
    Players {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Show the stat leaderboard with a sortable column.
    ///
    /// Opens sorted by points, best first, like the dashboard table.
    Stats {
        #[clap(flatten)]
        common: CommonArgs,

        /// Column to sort by.
        #[clap(long, short, value_enum, default_value_t = SortKey::Points)]
        sort: SortKey,

        /// Sort ascending instead of descending.
        #[clap(long)]
        asc: bool,
    },

    /// List NBA arenas with location, capacity, and opening year.
    Stadiums {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// List franchises, optionally filtered by a name/city substring.
    Teams {
        #[clap(flatten)]
        common: CommonArgs,

        /// Case-insensitive substring matched against team name or city.
        #[clap(long, short = 'q')]
        search: Option<String>,
    },

    /// Create a new player on the backend.
    AddPlayer {
        /// Backend base URL (or set `COURTSIDE_API_URL` env var).
        #[clap(long)]
        api_url: Option<String>,

        /// Player name.
        #[clap(long)]
        name: String,

        /// Player position.
        #[clap(long)]
        position: String,

        /// Player team.
        #[clap(long)]
        team: String,
    },
}
