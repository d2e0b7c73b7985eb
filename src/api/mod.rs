//! Backend REST API: wire types and HTTP client.
//!
//! - `types`: serde models for each resource the dashboard consumes
//! - `http`: the [`ApiClient`] issuing one request per page visit

pub mod http;
pub mod types;

// Re-export commonly used items for convenience
pub use http::ApiClient;
pub use types::{Conference, NewPlayer, PlayerInfo, PlayerStatLine, Stadium, Team};
