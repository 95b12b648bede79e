//! User interaction prompts
//!
//! Used by the CLI when a team search matches more than one team.

use crate::data_fetcher::models::TeamResponse;
use crate::error::AppError;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};

/// Lists `teams` on stdout and reads a 1-based selection from stdin.
///
/// # Returns
/// * `Ok(usize)` - Zero-based index into `teams`
/// * `Err(AppError)` - Invalid selection or error reading from stdin
pub async fn prompt_for_team_selection(query: &str, teams: &[TeamResponse]) -> Result<usize, AppError> {
    println!("Multiple teams found for '{query}':");
    for (i, team) in teams.iter().enumerate() {
        println!("{}. {}", i + 1, team.display_label());
    }
    println!("Please select a team by number: ");

    let mut reader = io::BufReader::new(io::stdin());
    read_selection(&mut reader, teams.len()).await
}

/// Reads one line from `reader` and parses it with [`parse_selection`].
pub async fn read_selection<R>(reader: &mut R, count: usize) -> Result<usize, AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut input = String::new();
    reader.read_line(&mut input).await?;
    parse_selection(&input, count)
}

/// Parses a 1-based menu choice into a zero-based index.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, AppError> {
    let selection: usize = input
        .trim()
        .parse()
        .map_err(|_| AppError::config_error("Invalid input. Please enter a number."))?;

    if selection < 1 || selection > count {
        return Err(AppError::config_error(
            "Invalid selection. Please choose a number from the list.",
        ));
    }
    Ok(selection - 1)
}
