//! JSON API for team generation
//!
//! String-in, string-out boundary for host services (bots, HTTP handlers).
//! This is where player data enters the system, so rating bounds and id
//! uniqueness are enforced here; the engine behind it trusts its input
//! apart from the roster size gate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::balancer::{generate_teams, generate_teams_seeded};
use crate::models::{
    BalanceQuality, Gender, Player, Position, PositionCounts, Team, TeamGenerationResult,
    RATING_MAX, RATING_MIN,
};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct GenerateTeamsRequest {
    pub schema_version: u8,
    /// Omit for a fresh random seed; set to reproduce an earlier result.
    #[serde(default)]
    pub seed: Option<u64>,
    pub players: Vec<PlayerData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerData {
    pub id: u64,
    pub name: String,
    pub rating: u8,
    pub gender: Gender,
    pub position: Position,
}

#[derive(Debug, Serialize)]
pub struct GenerateTeamsResponse {
    pub schema_version: u8,
    pub teams: Vec<TeamSummary>,
    pub rating_gap: f64,
    pub balance_quality: BalanceQuality,
    pub balance_message: String,
    /// Seed the engine actually ran with; feed it back to reproduce.
    pub seed: u64,
}

/// Team with its derived values materialized for consumers that do not
/// want to recompute them.
#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub players: Vec<Player>,
    pub average_rating: f64,
    pub female_count: usize,
    pub position_counts: PositionCounts,
}

impl TeamSummary {
    fn from_team(team: Team) -> Self {
        let average_rating = team.average_rating();
        let female_count = team.female_count();
        let position_counts = team.position_counts();
        TeamSummary {
            name: team.name,
            players: team.players,
            average_rating,
            female_count,
            position_counts,
        }
    }
}

impl GenerateTeamsResponse {
    fn from_result(result: TeamGenerationResult) -> Self {
        GenerateTeamsResponse {
            schema_version: SCHEMA_VERSION,
            teams: result.teams.into_iter().map(TeamSummary::from_team).collect(),
            rating_gap: result.rating_gap,
            balance_quality: result.balance_quality,
            balance_message: result.balance_message,
            seed: result.seed,
        }
    }
}

/// Main entry point for the JSON API - balances a roster from a JSON request.
pub fn generate_teams_json(request_json: &str) -> Result<String, String> {
    info!("Processing team generation request");

    let request: GenerateTeamsRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let roster = convert_roster(request.players)?;

    let result = match request.seed {
        Some(seed) => generate_teams_seeded(&roster, seed),
        None => generate_teams(&roster),
    }
    .map_err(|e| {
        warn!("Team generation failed: {}", e);
        e.to_string()
    })?;

    info!(
        "Teams generated: quality={} gap={} seed={}",
        result.balance_quality.as_str(),
        result.rating_gap,
        result.seed
    );

    let response = GenerateTeamsResponse::from_result(result);
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize result: {}", e))
}

fn convert_roster(players: Vec<PlayerData>) -> Result<Vec<Player>, String> {
    let mut seen_ids = HashSet::new();
    let mut roster = Vec::with_capacity(players.len());
    for data in players {
        if !seen_ids.insert(data.id) {
            return Err(format!("Duplicate player id in roster: {}", data.id));
        }
        roster.push(convert_player(data)?);
    }
    Ok(roster)
}

fn convert_player(data: PlayerData) -> Result<Player, String> {
    if !(RATING_MIN..=RATING_MAX).contains(&data.rating) {
        warn!("Rating out of range for player {}: {}", data.id, data.rating);
        return Err(format!(
            "Invalid rating for player '{}': must be {}..={}, got {}",
            data.name, RATING_MIN, RATING_MAX, data.rating
        ));
    }
    Ok(Player::new(data.id, data.name, data.rating, data.gender, data.position))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_players(count: u64) -> Vec<Value> {
        (0..count)
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("Player {}", id),
                    "rating": 70 + (id % 30),
                    "gender": if id % 2 == 0 { "female" } else { "male" },
                    "position": if id < 3 { "setter" } else { "universal" },
                })
            })
            .collect()
    }

    fn sample_request(seed: Option<u64>) -> String {
        let mut request = json!({
            "schema_version": 1,
            "players": sample_players(18),
        });
        if let Some(seed) = seed {
            request["seed"] = json!(seed);
        }
        request.to_string()
    }

    #[test]
    fn generates_three_teams_of_six() {
        let response_json = generate_teams_json(&sample_request(Some(5))).unwrap();
        let response: Value = serde_json::from_str(&response_json).unwrap();

        let teams = response["teams"].as_array().unwrap();
        assert_eq!(teams.len(), 3);
        for team in teams {
            assert_eq!(team["players"].as_array().unwrap().len(), 6);
            assert!(team["average_rating"].is_number());
            assert!(team["position_counts"]["setter"].is_number());
        }
        assert!(response["balance_message"].is_string());
        assert_eq!(response["seed"], json!(5));
    }

    #[test]
    fn seeded_requests_are_byte_identical() {
        let request = sample_request(Some(99));
        let first = generate_teams_json(&request).unwrap();
        let second = generate_teams_json(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_request_reports_the_drawn_seed() {
        let response_json = generate_teams_json(&sample_request(None)).unwrap();
        let response: Value = serde_json::from_str(&response_json).unwrap();
        let seed = response["seed"].as_u64().unwrap();

        // Replaying the reported seed reproduces the same teams.
        let replay_json = generate_teams_json(&sample_request(Some(seed))).unwrap();
        let replay: Value = serde_json::from_str(&replay_json).unwrap();
        assert_eq!(response["teams"], replay["teams"]);
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let request = json!({
            "schema_version": 9,
            "players": sample_players(18),
        })
        .to_string();
        let err = generate_teams_json(&request).unwrap_err();
        assert!(err.contains("schema version"), "unexpected error: {}", err);
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut players = sample_players(18);
        players[4]["rating"] = json!(69);
        let request = json!({ "schema_version": 1, "players": players }).to_string();
        let err = generate_teams_json(&request).unwrap_err();
        assert!(err.contains("Invalid rating"), "unexpected error: {}", err);

        let mut players = sample_players(18);
        players[4]["rating"] = json!(100);
        let request = json!({ "schema_version": 1, "players": players }).to_string();
        assert!(generate_teams_json(&request).is_err());
    }

    #[test]
    fn rejects_duplicate_player_ids() {
        let mut players = sample_players(18);
        players[7]["id"] = json!(3);
        let request = json!({ "schema_version": 1, "players": players }).to_string();
        let err = generate_teams_json(&request).unwrap_err();
        assert!(err.contains("Duplicate player id"), "unexpected error: {}", err);
    }

    #[test]
    fn rejects_wrong_roster_size() {
        let request =
            json!({ "schema_version": 1, "players": sample_players(17) }).to_string();
        let err = generate_teams_json(&request).unwrap_err();
        assert!(err.contains("roster size"), "unexpected error: {}", err);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = generate_teams_json("not json at all").unwrap_err();
        assert!(err.contains("Invalid JSON request"), "unexpected error: {}", err);
    }

    #[test]
    fn rejects_unknown_position_string() {
        let mut players = sample_players(18);
        players[0]["position"] = json!("coach");
        let request = json!({ "schema_version": 1, "players": players }).to_string();
        assert!(generate_teams_json(&request).is_err());
    }
}
