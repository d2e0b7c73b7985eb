//! NBA Reference Dashboard CLI Library
//!
//! A Rust library backing the `courtside` CLI: it fetches NBA reference data
//! (players, teams, stadiums, statistics) from a REST backend and presents
//! each resource as a "page" with an explicit loading → (error | success)
//! lifecycle.
//!
//! ## Features
//!
//! - **Fetch-lifecycle pages**: one GET per page visit, tracked by a
//!   [`PageState`] that is always exactly one of loading, error, or success
//! - **Cancellation**: every request carries a [`CancelToken`]; a
//!   [`FetchScope`] cancels it on scope exit so late responses are discarded
//! - **Client-side transforms**: stable column sort for the stats table,
//!   substring search for the teams list
//! - **Create-player form**: POSTs a new player and reports one of four
//!   distinguishable outcome banners
//! - **Calculator utilities**: small arithmetic helpers with a checked divide
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::{api::ApiClient, fetch::FetchScope, pages::teams::TeamsPage};
//!
//! # async fn example() -> courtside::Result<()> {
//! let api = ApiClient::new("http://localhost:9090")?;
//! let scope = FetchScope::new();
//!
//! let mut page = TeamsPage::new();
//! page.load(&api, scope.token()).await;
//! println!("{}", page.render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a backend without passing `--api-url` every time:
//! ```bash
//! export COURTSIDE_API_URL=http://localhost:9090
//! ```

pub mod api;
pub mod calc;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod pages;

// Re-export commonly used types
pub use error::{CourtsideError, Result};
pub use fetch::{CancelToken, FetchScope, PageState};

pub const API_URL_ENV_VAR: &str = "COURTSIDE_API_URL";

/// Backend used when neither `--api-url` nor the env var is set.
pub const DEFAULT_API_URL: &str = "http://localhost:9090";
