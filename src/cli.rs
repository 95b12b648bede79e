use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football scores, fixtures and player statistics from API-Football.
///
/// Requires an API-Football key, stored with `config set api_key <KEY>`
/// or provided through the SOCCER_CLI_API_KEY environment variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of the default location.
    #[arg(long = "config", global = true, value_name = "PATH", help_heading = "Configuration")]
    pub config_path: Option<String>,

    /// Also write logs to the terminal.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the latest result for a team.
    Scores {
        /// Team name to search for.
        team: String,
        /// Number of recent fixtures to show.
        #[arg(long, short = 'n', default_value_t = 1)]
        last: u32,
    },
    /// Show details of a single fixture.
    Fixture {
        /// Fixture ID as shown by `scores`.
        id: u32,
    },
    /// Show player statistics for a fixture.
    Players {
        /// Fixture ID as shown by `scores`.
        fixture_id: u32,
    },
    /// Manage configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Set a configuration property (currently only `api_key`).
    Set { key: String, value: String },
    /// List current configuration settings.
    List,
}
