use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub national: bool,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Home ground of a team. Every field is nullable upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Venue {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Element of the `/teams` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: Team,
    #[serde(default)]
    pub venue: Option<Venue>,
}

impl TeamResponse {
    /// Label used when the user picks between several matching teams
    pub fn display_label(&self) -> String {
        match &self.team.country {
            Some(country) => format!("{} ({}, ID: {})", self.team.name, country, self.team.id),
            None => format!("{} (ID: {})", self.team.name, self.team.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_team_response() {
        let json = r#"{"team":{"id":1,"name":"Test FC"}}"#;
        let team: TeamResponse = serde_json::from_str(json).unwrap();
        assert_eq!(team.team.id, 1);
        assert_eq!(team.team.name, "Test FC");
        assert!(!team.team.national);
        assert!(team.venue.is_none());
        assert_eq!(team.display_label(), "Test FC (ID: 1)");
    }

    #[test]
    fn test_full_team_response() {
        let json = r#"{
            "team": {
                "id": 33,
                "name": "Manchester United",
                "code": "MUN",
                "country": "England",
                "founded": 1878,
                "national": false,
                "logo": "https://media.api-sports.io/football/teams/33.png"
            },
            "venue": {
                "id": 556,
                "name": "Old Trafford",
                "address": "Sir Matt Busby Way",
                "city": "Manchester",
                "capacity": 76212,
                "surface": "grass",
                "image": "https://media.api-sports.io/football/venues/556.png"
            }
        }"#;
        let team: TeamResponse = serde_json::from_str(json).unwrap();
        assert_eq!(team.team.code.as_deref(), Some("MUN"));
        assert_eq!(team.team.founded, Some(1878));
        let venue = team.venue.as_ref().unwrap();
        assert_eq!(venue.name.as_deref(), Some("Old Trafford"));
        assert_eq!(venue.capacity, Some(76212));
        assert_eq!(
            team.display_label(),
            "Manchester United (England, ID: 33)"
        );
    }

    #[test]
    fn test_venue_with_nulls() {
        let json = r#"{"team":{"id":2,"name":"X"},"venue":{"id":null,"name":null}}"#;
        let team: TeamResponse = serde_json::from_str(json).unwrap();
        assert_eq!(team.venue, Some(Venue::default()));
    }
}
