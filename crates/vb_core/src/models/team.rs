use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Players per team. Fixed by the 3x6 session format.
pub const TEAM_SIZE: usize = 6;
/// Teams per session. Fixed by the 3x6 session format.
pub const TEAM_COUNT: usize = 3;
/// Display names in team-index order.
pub const TEAM_NAMES: [&str; TEAM_COUNT] = ["Team A", "Team B", "Team C"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>, // exactly TEAM_SIZE on engine output
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Team { name: name.into(), players: Vec::with_capacity(TEAM_SIZE) }
    }

    /// Mean skill rating of the roster. Empty team yields 0.0.
    pub fn average_rating(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.players.iter().map(|p| p.rating as u32).sum();
        sum as f64 / self.players.len() as f64
    }

    pub fn female_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_female()).count()
    }

    pub fn setter_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_setter()).count()
    }

    pub fn position_counts(&self) -> PositionCounts {
        PositionCounts::for_players(&self.players)
    }
}

/// Per-position tally of a team roster.
///
/// Every position key is always present when serialized (absent positions
/// count 0), so downstream consumers never need to handle missing keys.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionCounts {
    #[serde(default)]
    pub setter: u8,
    #[serde(default)]
    pub outside_hitter: u8,
    #[serde(default)]
    pub middle_blocker: u8,
    #[serde(default)]
    pub opposite: u8,
    #[serde(default)]
    pub libero: u8,
    #[serde(default)]
    pub universal: u8,
}

impl PositionCounts {
    pub fn for_players(players: &[Player]) -> Self {
        let mut counts = PositionCounts::default();
        for player in players {
            counts.bump(player.position);
        }
        counts
    }

    fn bump(&mut self, position: Position) {
        match position {
            Position::Setter => self.setter += 1,
            Position::OutsideHitter => self.outside_hitter += 1,
            Position::MiddleBlocker => self.middle_blocker += 1,
            Position::Opposite => self.opposite += 1,
            Position::Libero => self.libero += 1,
            Position::Universal => self.universal += 1,
        }
    }

    pub fn get(&self, position: Position) -> u8 {
        match position {
            Position::Setter => self.setter,
            Position::OutsideHitter => self.outside_hitter,
            Position::MiddleBlocker => self.middle_blocker,
            Position::Opposite => self.opposite,
            Position::Libero => self.libero,
            Position::Universal => self.universal,
        }
    }

    pub fn total(&self) -> u32 {
        Position::ALL.iter().map(|p| self.get(*p) as u32).sum()
    }
}
