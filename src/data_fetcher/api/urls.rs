//! Endpoint path building for the API-Football endpoints
//!
//! Paths include their query string and are appended to the client's base URL.

/// Builds the team search path. The name is percent-encoded so it always
/// travels as a single query value.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_team_search_path;
///
/// assert_eq!(build_team_search_path("Arsenal"), "/teams?search=Arsenal");
/// assert_eq!(
///     build_team_search_path("Brighton & Hove"),
///     "/teams?search=Brighton%20%26%20Hove"
/// );
/// ```
pub fn build_team_search_path(name: &str) -> String {
    format!("/teams?search={}", urlencoding::encode(name))
}

/// Builds the path for the `limit` most recent fixtures of a team.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_latest_fixtures_path;
///
/// assert_eq!(build_latest_fixtures_path(33, 1), "/fixtures?team=33&last=1");
/// ```
pub fn build_latest_fixtures_path(team_id: u32, limit: u32) -> String {
    format!("/fixtures?team={team_id}&last={limit}")
}

/// Builds the fixture detail path.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_fixture_path;
///
/// assert_eq!(build_fixture_path(1035045), "/fixtures?id=1035045");
/// ```
pub fn build_fixture_path(fixture_id: u32) -> String {
    format!("/fixtures?id={fixture_id}")
}

/// Builds the per-fixture player statistics path.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_player_stats_path;
///
/// assert_eq!(build_player_stats_path(1035045), "/fixtures/players?fixture=1035045");
/// ```
pub fn build_player_stats_path(fixture_id: u32) -> String {
    format!("/fixtures/players?fixture={fixture_id}")
}

/// Adds a `page` query parameter to an endpoint path.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::with_page;
///
/// assert_eq!(with_page("/players?team=33&season=2023", 2), "/players?team=33&season=2023&page=2");
/// assert_eq!(with_page("/players", 2), "/players?page=2");
/// ```
pub fn with_page(endpoint: &str, page: u32) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}page={page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_api_parameter_names() {
        assert_eq!(build_team_search_path("Test"), "/teams?search=Test");
        assert_eq!(build_latest_fixtures_path(33, 5), "/fixtures?team=33&last=5");
        assert_eq!(build_fixture_path(42), "/fixtures?id=42");
        assert_eq!(build_player_stats_path(42), "/fixtures/players?fixture=42");
    }

    #[test]
    fn test_team_search_encodes_reserved_characters() {
        assert_eq!(
            build_team_search_path("Brighton & Hove"),
            "/teams?search=Brighton%20%26%20Hove"
        );
        assert_eq!(build_team_search_path("A#B+C"), "/teams?search=A%23B%2BC");
        assert_eq!(build_team_search_path("Atlético"), "/teams?search=Atl%C3%A9tico");
    }

    #[test]
    fn test_with_page_separator() {
        assert_eq!(with_page("/fixtures/players?fixture=1", 3), "/fixtures/players?fixture=1&page=3");
        assert_eq!(with_page("/leagues", 1), "/leagues?page=1");
    }
}
