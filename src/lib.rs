//! API-Football client library
//!
//! This library provides a typed client for the API-Football v3 service:
//! team search, latest fixtures, fixture details and player statistics, with
//! retrying requests, cancellation and paging helpers.
//!
//! # Examples
//!
//! ```rust,no_run
//! use soccer_cli::data_fetcher::ApiClient;
//! use soccer_cli::error::AppError;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = ApiClient::new("my-api-key")?;
//!     let cancel = CancellationToken::new();
//!
//!     // Find the team and print its most recent fixture
//!     let teams = client.search_teams(&cancel, "Arsenal").await?;
//!     if let Some(team) = teams.first() {
//!         for fixture in client.latest_fixtures(&cancel, team.team.id, 1).await? {
//!             println!(
//!                 "{} {} {}",
//!                 fixture.teams.home.name,
//!                 fixture.score(),
//!                 fixture.teams.away.name
//!             );
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{
    ApiResponse, FixtureResponse, Paging, PlayerStatsParent, TeamResponse,
};
pub use data_fetcher::{ApiClient, UpstreamErrorPolicy, next_page};
pub use error::{AppError, ErrorKind};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
