// src/main.rs
use clap::Parser;
use soccer_cli::cli::{Args, Command};
use soccer_cli::commands::{
    handle_config_command, handle_fixture_command, handle_players_command, handle_scores_command,
};
use soccer_cli::config::Config;
use soccer_cli::data_fetcher::ApiClient;
use soccer_cli::error::AppError;
use soccer_cli::logging::setup_logging;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config_path = args
        .config_path
        .clone()
        .unwrap_or_else(Config::get_config_path);

    // Config commands must not require a valid config, so they skip loading it
    if let Command::Config { action } = &args.command {
        return handle_config_command(action, &config_path).await;
    }

    let config = Config::load_from(&config_path).await?;

    let custom_log_path = args.log_file.as_deref().or(config.log_file_path.as_deref());
    let (log_file_path, _guard) =
        setup_logging(custom_log_path, &Config::get_log_dir_path(), args.debug).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let client = ApiClient::from_config(&config)?;

    // Ctrl+C cancels any in-flight request or pending backoff
    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling pending requests");
            ctrl_c_token.cancel();
        }
    });

    match &args.command {
        Command::Scores { team, last } => {
            handle_scores_command(&client, &cancel, team, *last).await
        }
        Command::Fixture { id } => handle_fixture_command(&client, &cancel, *id).await,
        Command::Players { fixture_id } => {
            handle_players_command(&client, &cancel, *fixture_id).await
        }
        Command::Config { .. } => Ok(()),
    }
}
