use crate::cli::ConfigAction;
use crate::config::Config;
use crate::config::user_prompts::prompt_for_team_selection;
use crate::data_fetcher::ApiClient;
use crate::error::AppError;
use crate::ui::{print_fixtures, print_message, print_player_stats};
use chrono::Local;
use std::io::stdout;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Handles `scores <TEAM>`.
///
/// Searches for the team, asks the user to choose when several match, then
/// prints the most recent fixtures.
pub async fn handle_scores_command(
    client: &ApiClient,
    cancel: &CancellationToken,
    team_name: &str,
    last: u32,
) -> Result<(), AppError> {
    let teams = client.search_teams(cancel, team_name).await?;

    let team = match teams.len() {
        0 => {
            return Err(AppError::config_error(format!(
                "No team found matching '{team_name}'"
            )));
        }
        1 => &teams[0],
        _ => &teams[prompt_for_team_selection(team_name, &teams).await?],
    };
    info!("Using team {} (ID: {})", team.team.name, team.team.id);

    let fixtures = client.latest_fixtures(cancel, team.team.id, last).await?;
    let mut out = stdout();
    if fixtures.is_empty() {
        print_message(&mut out, "No recent fixtures found for this team.")?;
        return Ok(());
    }
    print_fixtures(&mut out, &fixtures, &Local)?;
    Ok(())
}

/// Handles `fixture <ID>`.
pub async fn handle_fixture_command(
    client: &ApiClient,
    cancel: &CancellationToken,
    fixture_id: u32,
) -> Result<(), AppError> {
    let details = client.fixture_details(cancel, fixture_id).await?;
    let mut out = stdout();
    if details.is_empty() {
        print_message(&mut out, &format!("No fixture found with ID {fixture_id}."))?;
        return Ok(());
    }
    print_fixtures(&mut out, &details, &Local)?;
    Ok(())
}

/// Handles `players <FIXTURE_ID>`.
pub async fn handle_players_command(
    client: &ApiClient,
    cancel: &CancellationToken,
    fixture_id: u32,
) -> Result<(), AppError> {
    let stats = client.player_stats_for_fixture(cancel, fixture_id).await?;
    let mut out = stdout();
    if stats.is_empty() {
        print_message(
            &mut out,
            &format!("No player statistics available for fixture {fixture_id}."),
        )?;
        return Ok(());
    }
    print_player_stats(&mut out, &stats)?;
    Ok(())
}

/// Handles `config set` and `config list` against the config file at `path`.
///
/// `set` starts from the existing file when there is one, so other settings
/// are preserved.
pub async fn handle_config_command(action: &ConfigAction, path: &str) -> Result<(), AppError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = if std::path::Path::new(path).exists() {
                Config::load_from_path(path).await?
            } else {
                Config::default()
            };
            config.set_value(key, value)?;
            config.save_to_path(path).await?;
            println!("Successfully set {key}.");
        }
        ConfigAction::List => Config::display(path).await?,
    }
    Ok(())
}
