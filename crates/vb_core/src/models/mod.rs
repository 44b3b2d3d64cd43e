pub mod player;
pub mod result;
pub mod team;

pub use player::{Gender, Player, PlayerId, Position, RATING_MAX, RATING_MIN};
pub use result::{BalanceQuality, TeamGenerationResult};
pub use team::{PositionCounts, Team, TEAM_COUNT, TEAM_NAMES, TEAM_SIZE};
