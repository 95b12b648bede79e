use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsTeam {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// Last time the statistics were updated upstream
    #[serde(default)]
    pub update: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameStats {
    #[serde(default)]
    pub minutes: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub position: Option<String>,
    /// Sent as a decimal string, e.g. "7.3"
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub captain: bool,
    #[serde(default)]
    pub substitute: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShotStats {
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub on: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GoalStats {
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub conceded: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub saves: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PassStats {
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub key: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TackleStats {
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub blocks: Option<u32>,
    #[serde(default)]
    pub interceptions: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CardStats {
    #[serde(default)]
    pub yellow: u32,
    #[serde(default)]
    pub red: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerStatistics {
    #[serde(default)]
    pub games: GameStats,
    #[serde(default)]
    pub shots: ShotStats,
    #[serde(default)]
    pub goals: GoalStats,
    #[serde(default)]
    pub passes: PassStats,
    #[serde(default)]
    pub tackles: TackleStats,
    #[serde(default)]
    pub cards: CardStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsEntry {
    pub player: PlayerInfo,
    #[serde(default)]
    pub statistics: Vec<PlayerStatistics>,
}

impl PlayerStatsEntry {
    /// Statistics block for the fixture; the endpoint sends exactly one
    pub fn stats(&self) -> Option<&PlayerStatistics> {
        self.statistics.first()
    }
}

/// Element of the `/fixtures/players` payload: one team and its players
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsParent {
    pub team: StatsTeam,
    #[serde(default)]
    pub players: Vec<PlayerStatsEntry>,
}
