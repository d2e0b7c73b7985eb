//! Wire types for the NBA reference backend.
//!
//! Each page deserializes one flat record shape. Records are immutable
//! snapshots of server state for a single page visit; nothing here is
//! persisted or mutated locally.

use serde::{Deserialize, Serialize};


/// Player biography record from `/api/player-info`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerInfo {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub position: String,
    /// Display strings as served (e.g. `6'7"`), never parsed.
    pub height: String,
    pub weight: String,
}

/// Per-player averages from `/api/player-stats`. The numeric columns are
/// the sortable ones.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerStatLine {
    pub name: String,
    pub team: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

/// NBA conference; the backend serves exactly these two strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Conference {
    East,
    West,
}

impl std::fmt::Display for Conference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conference::East => write!(f, "East"),
            Conference::West => write!(f, "West"),
        }
    }
}

/// Franchise record from `/api/teams`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Team {
    pub name: String,
    pub city: String,
    pub conference: Conference,
}

/// Arena record from `/api/stadiums`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Stadium {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub location: String,
    pub capacity: u32,
    /// Year the building opened.
    pub opened: u16,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Envelope for `/api/stadiums`; the only list endpoint that wraps its array.
#[derive(Debug, Deserialize)]
pub struct StadiumsResponse {
    pub stadiums: Vec<Stadium>,
}

/// Request body for `POST /api/players`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub team: String,
}
