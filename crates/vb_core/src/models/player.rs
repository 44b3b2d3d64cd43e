use serde::{Deserialize, Serialize};

/// Stable player identifier assigned by the surrounding service.
///
/// Opaque to the engine: only equality matters here. The balancing
/// algorithm never reads it.
pub type PlayerId = u64;

/// Lower bound of the skill rating domain.
pub const RATING_MIN: u8 = 70;
/// Upper bound of the skill rating domain (99 = strongest).
pub const RATING_MAX: u8 = 99;

/// Player data for the team balancing engine.
///
/// # Boundary Contract
/// - `rating` is expected to lie in `RATING_MIN..=RATING_MAX`. The engine
///   treats it as an opaque ordering key and does not revalidate; bounds are
///   enforced where player data enters the system (see `api::json_api`).
/// - `name` is display-only and never influences assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: u8,
    pub gender: Gender,
    pub position: Position,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        rating: u8,
        gender: Gender,
        position: Position,
    ) -> Self {
        Player { id, name: name.into(), rating, gender, position }
    }

    pub fn is_setter(&self) -> bool {
        self.position.is_setter()
    }

    pub fn is_female(&self) -> bool {
        matches!(self.gender, Gender::Female)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Court position a player signed up to play.
///
/// `Universal` is the catch-all for players without a fixed role; the
/// balancer treats everything except `Setter` identically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Setter,
    OutsideHitter,
    MiddleBlocker,
    Opposite,
    Libero,
    Universal,
}

impl Position {
    /// All positions in stable declaration order, for per-position tallies.
    pub const ALL: [Position; 6] = [
        Position::Setter,
        Position::OutsideHitter,
        Position::MiddleBlocker,
        Position::Opposite,
        Position::Libero,
        Position::Universal,
    ];

    pub fn is_setter(&self) -> bool {
        matches!(self, Position::Setter)
    }

    /// Canonical wire string, identical to the serde encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Setter => "setter",
            Position::OutsideHitter => "outside_hitter",
            Position::MiddleBlocker => "middle_blocker",
            Position::Opposite => "opposite",
            Position::Libero => "libero",
            Position::Universal => "universal",
        }
    }
}
