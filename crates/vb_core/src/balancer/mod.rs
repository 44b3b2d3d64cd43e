//! Team balancing engine.
//!
//! `generate_teams` is the production entry: it draws a fresh seed so every
//! call can shuffle differently, and echoes that seed in the result for
//! reproduction. `generate_teams_seeded` is the deterministic entry used by
//! callers that already hold a seed (replays, tests, support requests).

pub mod evaluate;
pub mod partition;


pub use evaluate::BalanceMetrics;

use crate::error::{Error, Result};
use crate::models::{Player, TeamGenerationResult, TEAM_COUNT, TEAM_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Players a session roster must contain. The engine refuses anything else.
pub const ROSTER_SIZE: usize = TEAM_COUNT * TEAM_SIZE;

/// Balances the roster into three teams using a freshly drawn seed.
pub fn generate_teams(roster: &[Player]) -> Result<TeamGenerationResult> {
    generate_teams_seeded(roster, rand::random())
}

/// Balances the roster into three teams, reproducibly for the given seed.
pub fn generate_teams_seeded(roster: &[Player], seed: u64) -> Result<TeamGenerationResult> {
    if roster.len() != ROSTER_SIZE {
        return Err(Error::WrongRosterSize { expected: ROSTER_SIZE, found: roster.len() });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let teams = partition::build_teams(roster, &mut rng);

    let metrics = evaluate::evaluate_teams(&teams);
    let quality = evaluate::classify(&metrics);
    let message = evaluate::build_message(&teams, &metrics, quality);
    log::debug!(
        "teams generated: seed={} gap={} setters={} quality={}",
        seed,
        metrics.rating_gap,
        metrics.setter_score,
        quality.as_str()
    );

    Ok(TeamGenerationResult {
        teams,
        rating_gap: metrics.rating_gap,
        balance_quality: quality,
        balance_message: message,
        seed,
    })
}
