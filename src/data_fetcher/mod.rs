pub mod api;
pub mod models;
pub mod pagination;

pub use api::{ApiClient, UpstreamErrorPolicy};
pub use models::{ApiResponse, FixtureResponse, Paging, PlayerStatsParent, TeamResponse};
pub use pagination::next_page;
