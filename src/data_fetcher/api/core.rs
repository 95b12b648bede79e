//! Typed API-Football endpoint operations
//!
//! Each operation builds one endpoint path and delegates retry and decoding
//! to [`ApiClient::execute`].

use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use super::client::ApiClient;
use super::urls::{
    build_fixture_path, build_latest_fixtures_path, build_player_stats_path,
    build_team_search_path,
};
use crate::data_fetcher::models::{FixtureResponse, PlayerStatsParent, TeamResponse};
use crate::error::AppError;

fn require_positive(value: u32, what: &str) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::config_error(format!("{what} must be a positive number")));
    }
    Ok(())
}

impl ApiClient {
    /// Searches teams by name. No match is an empty list, not an error.
    #[instrument(skip(self, cancel))]
    pub async fn search_teams(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> Result<Vec<TeamResponse>, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::config_error("Team name cannot be empty"));
        }
        let teams: Vec<TeamResponse> = self
            .execute_payload(cancel, &build_team_search_path(name))
            .await?;
        info!("Found {} team(s) matching '{name}'", teams.len());
        Ok(teams)
    }

    /// Returns the `limit` most recent fixtures of a team.
    #[instrument(skip(self, cancel))]
    pub async fn latest_fixtures(
        &self,
        cancel: &CancellationToken,
        team_id: u32,
        limit: u32,
    ) -> Result<Vec<FixtureResponse>, AppError> {
        require_positive(team_id, "Team ID")?;
        require_positive(limit, "Fixture limit")?;
        self.execute_payload(cancel, &build_latest_fixtures_path(team_id, limit))
            .await
    }

    /// Returns the details of one fixture (a list of at most one element).
    #[instrument(skip(self, cancel))]
    pub async fn fixture_details(
        &self,
        cancel: &CancellationToken,
        fixture_id: u32,
    ) -> Result<Vec<FixtureResponse>, AppError> {
        require_positive(fixture_id, "Fixture ID")?;
        self.execute_payload(cancel, &build_fixture_path(fixture_id))
            .await
    }

    /// Returns per-team player statistics for a fixture.
    #[instrument(skip(self, cancel))]
    pub async fn player_stats_for_fixture(
        &self,
        cancel: &CancellationToken,
        fixture_id: u32,
    ) -> Result<Vec<PlayerStatsParent>, AppError> {
        require_positive(fixture_id, "Fixture ID")?;
        self.execute_payload(cancel, &build_player_stats_path(fixture_id))
            .await
    }
}
