//! # vb_core - Deterministic Volleyball Team Balancing Engine
//!
//! This library partitions a fixed 18-player roster into 3 teams of 6,
//! balanced on skill rating, gender distribution and setter coverage, with
//! a JSON API for easy integration with chat bots and web services.
//!
//! ## Features
//! - 100% deterministic balancing (same seed = same teams)
//! - Setter coverage first, gender spread second, ratings snake-drafted
//! - Balance verdict (excellent/good/fair) with a human-readable message
//! - JSON API for easy integration

pub mod api;
pub mod balancer;
pub mod error;
pub mod models;
pub mod roster;

// Re-export main API functions
pub use api::{generate_teams_json, GenerateTeamsRequest, GenerateTeamsResponse};
pub use error::{Error, Result};

// Re-export engine entry points
pub use balancer::{generate_teams, generate_teams_seeded, BalanceMetrics, ROSTER_SIZE};

// Re-export core models
pub use models::{
    BalanceQuality, Gender, Player, PlayerId, Position, PositionCounts, Team,
    TeamGenerationResult, RATING_MAX, RATING_MIN, TEAM_COUNT, TEAM_NAMES, TEAM_SIZE,
};

// Re-export signup intake
pub use roster::{cut_roster, RosterCut, Signup, ROSTER_CAPACITY};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
