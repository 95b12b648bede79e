use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FixtureStatus {
    #[serde(default)]
    pub long: String,
    #[serde(default)]
    pub short: String,
    /// Minutes played, null before kickoff
    #[serde(default)]
    pub elapsed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FixtureVenue {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    #[serde(default)]
    pub referee: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Kickoff as an RFC 3339 string
    #[serde(default)]
    pub date: Option<String>,
    /// Kickoff as unix seconds
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub venue: Option<FixtureVenue>,
    #[serde(default)]
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct League {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub round: Option<String>,
}

/// Team reference inside a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureTeam {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// `None` for draws and unfinished games
    #[serde(default)]
    pub winner: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureTeams {
    pub home: FixtureTeam,
    pub away: FixtureTeam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Goals {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

/// Element of the `/fixtures` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureResponse {
    pub fixture: Fixture,
    #[serde(default)]
    pub league: Option<League>,
    pub teams: FixtureTeams,
    #[serde(default)]
    pub goals: Goals,
}

impl FixtureResponse {
    /// Score as `home - away`, or `-` when the game has no goals data yet
    pub fn score(&self) -> String {
        match (self.goals.home, self.goals.away) {
            (Some(home), Some(away)) => format!("{home} - {away}"),
            _ => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "fixture": {
                "id": 1035045,
                "referee": "M. Oliver",
                "timezone": "UTC",
                "date": "2023-08-14T19:00:00+00:00",
                "timestamp": 1692039600,
                "venue": {"id": 556, "name": "Old Trafford", "city": "Manchester"},
                "status": {"long": "Match Finished", "short": "FT", "elapsed": 90}
            },
            "league": {
                "id": 39,
                "name": "Premier League",
                "country": "England",
                "season": 2023,
                "round": "Regular Season - 1"
            },
            "teams": {
                "home": {"id": 33, "name": "Manchester United", "logo": null, "winner": true},
                "away": {"id": 39, "name": "Wolves", "logo": null, "winner": false}
            },
            "goals": {"home": 1, "away": 0}
        }"#
    }

    #[test]
    fn test_fixture_response_decoding() {
        let fixture: FixtureResponse = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(fixture.fixture.id, 1035045);
        assert_eq!(fixture.fixture.timestamp, 1692039600);
        assert_eq!(fixture.fixture.status.short, "FT");
        assert_eq!(fixture.fixture.status.elapsed, Some(90));
        assert_eq!(fixture.teams.home.name, "Manchester United");
        assert_eq!(fixture.teams.home.winner, Some(true));
        assert_eq!(
            fixture.league.as_ref().unwrap().round.as_deref(),
            Some("Regular Season - 1")
        );
        assert_eq!(fixture.score(), "1 - 0");
    }

    #[test]
    fn test_scheduled_fixture_has_no_score() {
        let json = r#"{
            "fixture": {"id": 7, "timestamp": 1700000000, "status": {"long": "Not Started", "short": "NS", "elapsed": null}},
            "teams": {"home": {"id": 1, "name": "A"}, "away": {"id": 2, "name": "B"}},
            "goals": {"home": null, "away": null}
        }"#;
        let fixture: FixtureResponse = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.goals, Goals::default());
        assert_eq!(fixture.score(), "-");
        assert!(fixture.league.is_none());
    }
}
