//! Plain-text tables for fixtures and player statistics
//!
//! Rows are built as strings first so layout can be tested without a
//! terminal; `print_*` functions add header colors when writing.

use chrono::{DateTime, TimeZone};
use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use std::fmt::Display;
use std::io::Write;

use super::colors::{header_fg, message_fg, team_fg};
use crate::data_fetcher::models::{FixtureResponse, PlayerStatsParent};

pub const FIXTURE_HEADERS: [&str; 6] = ["ID", "Date", "Home", "Score", "Away", "Status"];
pub const PLAYER_HEADERS: [&str; 8] = [
    "Player", "Pos", "Min", "Rating", "Goals", "Assists", "Passes", "Cards",
];

/// Formats a unix kickoff timestamp as `YYYY-MM-DD` in `tz`.
pub fn format_kickoff_date<Tz>(timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(tz).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn fixture_rows<Tz>(fixtures: &[FixtureResponse], tz: &Tz) -> Vec<Vec<String>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fixtures
        .iter()
        .map(|f| {
            vec![
                f.fixture.id.to_string(),
                format_kickoff_date(f.fixture.timestamp, tz),
                f.teams.home.name.clone(),
                f.score(),
                f.teams.away.name.clone(),
                f.fixture.status.long.clone(),
            ]
        })
        .collect()
}

pub fn player_rows(team: &PlayerStatsParent) -> Vec<Vec<String>> {
    team.players
        .iter()
        .map(|entry| {
            let stats = entry.stats().cloned().unwrap_or_default();
            let cards = match (stats.cards.yellow, stats.cards.red) {
                (0, 0) => "-".to_string(),
                (yellow, 0) => format!("{yellow}Y"),
                (0, red) => format!("{red}R"),
                (yellow, red) => format!("{yellow}Y {red}R"),
            };
            vec![
                entry.player.name.clone(),
                opt_to_string(stats.games.position),
                opt_to_string(stats.games.minutes),
                opt_to_string(stats.games.rating),
                opt_to_string(stats.goals.total),
                opt_to_string(stats.goals.assists),
                opt_to_string(stats.passes.total),
                cards,
            ]
        })
        .collect()
}

/// Lays out a header and rows as aligned text lines, the header followed by
/// a dashed rule.
pub fn layout_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers.to_vec()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_line(row.iter().map(String::as_str).collect()));
    }
    lines
}

fn write_table<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    let mut iter = lines.iter();
    if let Some(header) = iter.next() {
        queue!(
            out,
            SetForegroundColor(header_fg()),
            Print(header),
            ResetColor,
            Print("\n")
        )?;
    }
    for line in iter {
        queue!(out, Print(line), Print("\n"))?;
    }
    out.flush()
}

pub fn print_fixtures<W, Tz>(out: &mut W, fixtures: &[FixtureResponse], tz: &Tz) -> std::io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let lines = layout_table(&FIXTURE_HEADERS, &fixture_rows(fixtures, tz));
    write_table(out, &lines)
}

pub fn print_player_stats<W: Write>(out: &mut W, teams: &[PlayerStatsParent]) -> std::io::Result<()> {
    for team in teams {
        queue!(
            out,
            SetForegroundColor(team_fg()),
            Print(&team.team.name),
            ResetColor,
            Print("\n")
        )?;
        let lines = layout_table(&PLAYER_HEADERS, &player_rows(team));
        write_table(out, &lines)?;
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Prints an informational message such as "no fixtures found".
pub fn print_message<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    queue!(
        out,
        SetForegroundColor(message_fg()),
        Print(message),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}
