//! Entry point: parse CLI and dispatch to page handlers.

use anyhow::Context;
use clap::Parser;
use courtside::cli::{Commands, Courtside};
use courtside::pages::{
    add_player::handle_add_player, player_stats::handle_player_stats,
    players_info::handle_players_info, stadiums::handle_stadiums, teams::handle_teams,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = Courtside::parse();

    match app.command {
        Commands::Players { common } => handle_players_info(common.api_url, common.json)
            .await
            .context("players page failed")?,

        Commands::Stats { common, sort, asc } => {
            handle_player_stats(common.api_url, sort, asc, common.json)
                .await
                .context("stats page failed")?
        }

        Commands::Stadiums { common } => handle_stadiums(common.api_url, common.json)
            .await
            .context("stadiums page failed")?,

        Commands::Teams { common, search } => handle_teams(common.api_url, search, common.json)
            .await
            .context("teams page failed")?,

        Commands::AddPlayer {
            api_url,
            name,
            position,
            team,
        } => handle_add_player(api_url, name, position, team)
            .await
            .context("add-player form failed")?,
    }

    Ok(())
}
