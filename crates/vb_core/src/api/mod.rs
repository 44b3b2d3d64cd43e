pub mod json_api;

pub use json_api::{
    generate_teams_json, GenerateTeamsRequest, GenerateTeamsResponse, PlayerData, TeamSummary,
};
