//! # Balance Evaluator & Classifier
//!
//! Scores a constructed 3-team assignment on three metrics and folds them
//! into a single verdict:
//!
//! - `rating_gap`: spread between the strongest and weakest team average.
//!   Under 3 points the difference is barely noticeable on court; above 5
//!   one team will dominate.
//! - `gender_variance`: population variance of the per-team female counts.
//!   0.0 means a perfectly even split; above 2 the mix is visibly lopsided.
//! - `setter_score`: teams with at least one setter (0-3). Anything below 3
//!   forces a team to improvise its offense.
//!
//! Classification is pure: the same metrics always yield the same quality
//! and message. All randomness lives in the partition stage.

use crate::models::{BalanceQuality, Team};

/// Metrics backing the balance verdict. `gender_variance` stays internal;
/// the result only carries the gap and the verdict derived from all three.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceMetrics {
    /// Max minus min of team average ratings, rounded to one decimal.
    pub rating_gap: f64,
    /// Population variance of the per-team female counts.
    pub gender_variance: f64,
    /// Number of teams with at least one setter.
    pub setter_score: u8,
}

/// Classification thresholds, inclusive on every bound.
pub mod thresholds {
    /// Max rating gap still considered excellent.
    pub const EXCELLENT_MAX_GAP: f64 = 3.0;
    /// Max gender variance still considered excellent.
    pub const EXCELLENT_MAX_GENDER_VARIANCE: f64 = 1.0;
    /// Max rating gap still considered good.
    pub const GOOD_MAX_GAP: f64 = 5.0;
    /// Max gender variance still considered good.
    pub const GOOD_MAX_GENDER_VARIANCE: f64 = 2.0;
}

/// Computes the three balance metrics for the constructed teams.
///
/// The rating gap is rounded here, once, so the classifier and the reported
/// result always agree on the value they saw.
pub fn evaluate_teams(teams: &[Team]) -> BalanceMetrics {
    if teams.is_empty() {
        return BalanceMetrics { rating_gap: 0.0, gender_variance: 0.0, setter_score: 0 };
    }

    let averages: Vec<f64> = teams.iter().map(Team::average_rating).collect();
    let max = averages.iter().cloned().fold(f64::MIN, f64::max);
    let min = averages.iter().cloned().fold(f64::MAX, f64::min);

    let counts: Vec<f64> = teams.iter().map(|t| t.female_count() as f64).collect();
    let mean = counts.iter().sum::<f64>() / counts.len() as f64;
    let gender_variance =
        counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / counts.len() as f64;

    let setter_score = teams.iter().filter(|t| t.setter_count() > 0).count() as u8;

    BalanceMetrics { rating_gap: round_to_tenth(max - min), gender_variance, setter_score }
}

/// Folds the metrics into the final verdict. Bounds are inclusive.
pub fn classify(metrics: &BalanceMetrics) -> BalanceQuality {
    if metrics.rating_gap <= thresholds::EXCELLENT_MAX_GAP
        && metrics.gender_variance <= thresholds::EXCELLENT_MAX_GENDER_VARIANCE
        && metrics.setter_score == 3
    {
        return BalanceQuality::Excellent;
    }
    if metrics.rating_gap <= thresholds::GOOD_MAX_GAP
        && metrics.gender_variance <= thresholds::GOOD_MAX_GENDER_VARIANCE
    {
        return BalanceQuality::Good;
    }
    BalanceQuality::Fair
}

/// Builds the human-readable verdict text. Deterministic given the inputs.
pub fn build_message(teams: &[Team], metrics: &BalanceMetrics, quality: BalanceQuality) -> String {
    match quality {
        BalanceQuality::Excellent => {
            "Teams are well balanced! Great distribution of skill, positions and gender."
                .to_string()
        }
        BalanceQuality::Good => {
            let mut clauses: Vec<String> = Vec::new();
            if metrics.rating_gap > thresholds::EXCELLENT_MAX_GAP {
                clauses
                    .push(format!("Rating gap between teams is {:.1} points", metrics.rating_gap));
            }
            if metrics.setter_score < 3 {
                clauses.push("Not every team has a dedicated setter".to_string());
            }
            if clauses.is_empty() {
                return "Teams are balanced with minor variations in the gender mix.".to_string();
            }
            format!("{}.", clauses.join(". "))
        }
        BalanceQuality::Fair => {
            // max_by keeps the last maximum, so rating ties resolve to the
            // later team in sequence order.
            let strongest = teams.iter().max_by(|a, b| {
                a.average_rating()
                    .partial_cmp(&b.average_rating())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            match strongest {
                Some(team) => format!(
                    "{} looks strongest with an average rating of {:.1}. \
                     Position and gender distribution is still reasonable.",
                    team.name,
                    round_to_tenth(team.average_rating())
                ),
                None => "Teams could not be compared.".to_string(),
            }
        }
    }
}

/// Rounds to one decimal place, half away from zero. `f64::round` ties away
/// from zero, so scaling by ten is all that is needed.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Player, Position};

    fn team_of(name: &str, ratings: &[u8], females: usize, setters: usize) -> Team {
        let mut team = Team::new(name);
        for (i, rating) in ratings.iter().enumerate() {
            let gender = if i < females { Gender::Female } else { Gender::Male };
            let position = if i < setters { Position::Setter } else { Position::Universal };
            team.players.push(Player::new(i as u64, format!("P{}", i), *rating, gender, position));
        }
        team
    }

    #[test]
    fn test_round_to_tenth_half_away_from_zero() {
        assert_eq!(round_to_tenth(1.25), 1.3);
        assert_eq!(round_to_tenth(-1.25), -1.3);
        assert_eq!(round_to_tenth(2.04), 2.0);
        assert_eq!(round_to_tenth(2.06), 2.1);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn test_metrics_on_identical_teams() {
        let teams = vec![
            team_of("Team A", &[85; 6], 3, 1),
            team_of("Team B", &[85; 6], 3, 1),
            team_of("Team C", &[85; 6], 3, 1),
        ];
        let metrics = evaluate_teams(&teams);
        assert_eq!(metrics.rating_gap, 0.0);
        assert_eq!(metrics.gender_variance, 0.0);
        assert_eq!(metrics.setter_score, 3);
        assert_eq!(classify(&metrics), BalanceQuality::Excellent);
    }

    #[test]
    fn test_gender_variance_is_population_variance() {
        // Female counts 4, 3, 2 around mean 3 give (1 + 0 + 1) / 3.
        let teams = vec![
            team_of("Team A", &[85; 6], 4, 1),
            team_of("Team B", &[85; 6], 3, 1),
            team_of("Team C", &[85; 6], 2, 1),
        ];
        let metrics = evaluate_teams(&teams);
        assert!((metrics.gender_variance - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        let excellent =
            BalanceMetrics { rating_gap: 3.0, gender_variance: 1.0, setter_score: 3 };
        assert_eq!(classify(&excellent), BalanceQuality::Excellent);

        let good = BalanceMetrics { rating_gap: 5.0, gender_variance: 2.0, setter_score: 0 };
        assert_eq!(classify(&good), BalanceQuality::Good);

        let fair_gap = BalanceMetrics { rating_gap: 5.1, gender_variance: 0.0, setter_score: 3 };
        assert_eq!(classify(&fair_gap), BalanceQuality::Fair);

        let fair_variance =
            BalanceMetrics { rating_gap: 0.0, gender_variance: 2.1, setter_score: 3 };
        assert_eq!(classify(&fair_variance), BalanceQuality::Fair);
    }

    #[test]
    fn test_missing_setter_blocks_excellent() {
        let metrics = BalanceMetrics { rating_gap: 0.0, gender_variance: 0.0, setter_score: 2 };
        assert_eq!(classify(&metrics), BalanceQuality::Good);
    }

    #[test]
    fn test_message_excellent_is_fixed() {
        let teams = vec![
            team_of("Team A", &[85; 6], 3, 1),
            team_of("Team B", &[85; 6], 3, 1),
            team_of("Team C", &[85; 6], 3, 1),
        ];
        let metrics = evaluate_teams(&teams);
        let first = build_message(&teams, &metrics, BalanceQuality::Excellent);
        let second = build_message(&teams, &metrics, BalanceQuality::Excellent);
        assert_eq!(first, second);
        assert!(first.contains("well balanced"));
    }

    #[test]
    fn test_message_good_reports_gap_clause() {
        let metrics = BalanceMetrics { rating_gap: 4.2, gender_variance: 0.0, setter_score: 3 };
        let message = build_message(&[], &metrics, BalanceQuality::Good);
        assert!(message.contains("4.2"), "gap value missing: {}", message);
        assert!(!message.contains("setter"), "setter clause must not appear: {}", message);
    }

    #[test]
    fn test_message_good_reports_setter_clause() {
        let metrics = BalanceMetrics { rating_gap: 1.0, gender_variance: 0.0, setter_score: 2 };
        let message = build_message(&[], &metrics, BalanceQuality::Good);
        assert!(message.contains("setter"), "setter clause missing: {}", message);
        assert!(!message.contains("Rating gap"), "gap clause must not appear: {}", message);
    }

    #[test]
    fn test_message_good_joins_both_clauses() {
        let metrics = BalanceMetrics { rating_gap: 4.5, gender_variance: 0.0, setter_score: 1 };
        let message = build_message(&[], &metrics, BalanceQuality::Good);
        assert!(message.contains("4.5"));
        assert!(message.contains("setter"));
        assert!(message.contains(". "), "clauses must be period separated: {}", message);
    }

    #[test]
    fn test_message_good_falls_back_to_minor_variations() {
        // Only gender variance demoted the verdict; no clause applies.
        let metrics = BalanceMetrics { rating_gap: 2.0, gender_variance: 1.5, setter_score: 3 };
        let message = build_message(&[], &metrics, BalanceQuality::Good);
        assert!(message.contains("minor variations"), "fallback missing: {}", message);
    }

    #[test]
    fn test_message_fair_names_strongest_team() {
        let teams = vec![
            team_of("Team A", &[70; 6], 2, 0),
            team_of("Team B", &[95; 6], 2, 0),
            team_of("Team C", &[80; 6], 2, 0),
        ];
        let metrics = evaluate_teams(&teams);
        let message = build_message(&teams, &metrics, BalanceQuality::Fair);
        assert!(message.contains("Team B"), "strongest team not named: {}", message);
        assert!(message.contains("95.0"), "average missing: {}", message);
    }

    #[test]
    fn test_message_fair_tie_goes_to_last_team() {
        let teams = vec![
            team_of("Team A", &[90; 6], 2, 0),
            team_of("Team B", &[70; 6], 2, 0),
            team_of("Team C", &[90; 6], 2, 0),
        ];
        let metrics = evaluate_teams(&teams);
        let message = build_message(&teams, &metrics, BalanceQuality::Fair);
        assert!(message.contains("Team C"), "tie must resolve to the later team: {}", message);
    }
}
