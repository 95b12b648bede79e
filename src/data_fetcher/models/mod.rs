pub mod envelope;
pub mod fixtures;
pub mod players;
pub mod teams;

pub use envelope::{ApiResponse, Paging};
pub use fixtures::{
    Fixture, FixtureResponse, FixtureStatus, FixtureTeam, FixtureTeams, FixtureVenue, Goals,
    League,
};
pub use players::{
    CardStats, GameStats, GoalStats, PassStats, PlayerInfo, PlayerStatistics, PlayerStatsEntry,
    PlayerStatsParent, ShotStats, StatsTeam, TackleStats,
};
pub use teams::{Team, TeamResponse, Venue};
