//! Volleyball Team Balancer CLI
//!
//! Command-line front end over `vb_core`: balance a roster file into teams,
//! or emit a sample roster to try the engine without real signup data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use vb_core::{Gender, Player, Position, RATING_MAX, RATING_MIN, ROSTER_SIZE, SCHEMA_VERSION};

#[derive(Parser)]
#[command(name = "vb_cli")]
#[command(about = "Split a volleyball session roster into balanced teams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate balanced teams from a roster file
    Generate {
        /// Roster JSON file (array of 18 players)
        #[arg(long)]
        roster: PathBuf,

        /// Seed for a reproducible assignment (omit for a random one)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the raw response JSON instead of team sheets
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Emit a sample roster for demos and manual testing
    Sample {
        /// Seed for reproducible sample data
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Number of female players in the sample
        #[arg(long, default_value = "9")]
        females: usize,

        /// Number of setters in the sample
        #[arg(long, default_value = "3")]
        setters: usize,

        /// Output file (prints to stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { roster, seed, json } => run_generate(&roster, seed, json),
        Commands::Sample {
            seed,
            females,
            setters,
            out,
        } => run_sample(seed, females, setters, out.as_deref()),
    }
}

fn run_generate(roster_path: &Path, seed: Option<u64>, raw_json: bool) -> Result<()> {
    let roster_text = std::fs::read_to_string(roster_path)
        .with_context(|| format!("Failed to read roster file: {}", roster_path.display()))?;
    let players: serde_json::Value = serde_json::from_str(&roster_text)
        .with_context(|| format!("Failed to parse roster JSON: {}", roster_path.display()))?;

    let mut request = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "players": players,
    });
    if let Some(seed) = seed {
        request["seed"] = serde_json::json!(seed);
    }

    let response_text = vb_core::generate_teams_json(&request.to_string())
        .map_err(|e| anyhow::anyhow!("Team generation failed: {e}"))?;

    if raw_json {
        println!("{response_text}");
        return Ok(());
    }

    let response: serde_json::Value =
        serde_json::from_str(&response_text).context("Engine returned malformed JSON")?;
    print_team_sheets(&response);
    Ok(())
}

fn print_team_sheets(response: &serde_json::Value) {
    println!("🏐 Balanced teams (seed {})", response["seed"]);
    println!();

    for team in response["teams"].as_array().into_iter().flatten() {
        println!(
            "📋 {} (avg {:.1}, {} female)",
            team["name"].as_str().unwrap_or("?"),
            team["average_rating"].as_f64().unwrap_or(0.0),
            team["female_count"].as_u64().unwrap_or(0),
        );
        for player in team["players"].as_array().into_iter().flatten() {
            println!(
                "   - {} ({}, {}, {})",
                player["name"].as_str().unwrap_or("?"),
                player["rating"].as_u64().unwrap_or(0),
                player["position"].as_str().unwrap_or("?"),
                player["gender"].as_str().unwrap_or("?"),
            );
        }
        println!();
    }

    println!(
        "📊 Rating gap: {:.1}",
        response["rating_gap"].as_f64().unwrap_or(0.0)
    );
    println!(
        "✅ {}: {}",
        response["balance_quality"].as_str().unwrap_or("?"),
        response["balance_message"].as_str().unwrap_or("?"),
    );
}

fn run_sample(seed: u64, females: usize, setters: usize, out: Option<&Path>) -> Result<()> {
    let roster = sample_roster(seed, females, setters);
    let json = serde_json::to_string_pretty(&roster).context("Failed to serialize roster")?;

    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write roster file: {}", path.display()))?;
            println!("✅ Sample roster written to: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Builds a reproducible roster with the requested gender and setter counts.
///
/// Counts above the roster size saturate instead of erroring, so
/// `--females 99` simply produces an all-female roster.
fn sample_roster(seed: u64, females: usize, setters: usize) -> Vec<Player> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut genders: Vec<Gender> = (0..ROSTER_SIZE)
        .map(|i| if i < females { Gender::Female } else { Gender::Male })
        .collect();
    genders.shuffle(&mut rng);

    let court_roles = [
        Position::OutsideHitter,
        Position::MiddleBlocker,
        Position::Opposite,
        Position::Libero,
        Position::Universal,
    ];
    let mut positions: Vec<Position> = (0..ROSTER_SIZE)
        .map(|i| {
            if i < setters {
                Position::Setter
            } else {
                court_roles[i % court_roles.len()]
            }
        })
        .collect();
    positions.shuffle(&mut rng);

    (0..ROSTER_SIZE)
        .map(|i| {
            let rating = rng.gen_range(RATING_MIN..=RATING_MAX);
            Player::new(
                i as u64 + 1,
                format!("Player {}", i + 1),
                rating,
                genders[i],
                positions[i],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roster_has_requested_shape() {
        let roster = sample_roster(1, 9, 3);

        assert_eq!(roster.len(), ROSTER_SIZE);
        assert_eq!(roster.iter().filter(|p| p.is_female()).count(), 9);
        assert_eq!(roster.iter().filter(|p| p.is_setter()).count(), 3);
        for player in &roster {
            assert!((RATING_MIN..=RATING_MAX).contains(&player.rating));
        }
    }

    #[test]
    fn sample_roster_saturates_excess_counts() {
        let roster = sample_roster(2, 99, 0);

        assert_eq!(roster.iter().filter(|p| p.is_female()).count(), ROSTER_SIZE);
        assert_eq!(roster.iter().filter(|p| p.is_setter()).count(), 0);
    }

    #[test]
    fn sample_roster_is_reproducible() {
        assert_eq!(sample_roster(7, 9, 3), sample_roster(7, 9, 3));
    }

    #[test]
    fn sample_roster_feeds_the_engine() {
        let roster = sample_roster(3, 9, 3);
        let request = serde_json::json!({
            "schema_version": SCHEMA_VERSION,
            "seed": 5,
            "players": serde_json::to_value(&roster).unwrap(),
        });

        let response = vb_core::generate_teams_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["teams"].as_array().unwrap().len(), 3);
    }
}
