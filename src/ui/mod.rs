pub mod colors;
pub mod tables;

pub use tables::{format_kickoff_date, print_fixtures, print_message, print_player_stats};
