//! Partition Constructor
//!
//! Builds the 3x6 assignment in four fixed stages, each consuming unassigned
//! players and respecting the per-team cap:
//!
//! 1. Sort the roster strongest-first (stable).
//! 2. Setter seeding: shuffle the setters, deal the first three to teams
//!    0..2 in shuffled order, route extras to the emptiest open team.
//! 3. Gender seeding: shuffle the remaining female players and deal them
//!    round-robin in team-index order, skipping full teams.
//! 4. Snake draft: everyone still unassigned, strongest-first, along the
//!    boustrophedon walk 0,1,2,2,1,0,...
//!
//! The priority order is deliberate: positional coverage first, gender
//! spread second, rating balance absorbed by the snake draft. Shuffling in
//! stages 2 and 3 is the engine's only randomness, so reruns with a fresh
//! seed produce different but equally balanced assignments.

use crate::models::{Player, Team, TEAM_COUNT, TEAM_NAMES, TEAM_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on snake cursor advances per placement. One full snake
/// period visits every team from any cursor state, so hitting the bound
/// means no team has capacity.
const SNAKE_SCAN_LIMIT: usize = 2 * TEAM_COUNT;

/// Assembles teams from the roster. Callers validate the roster size; the
/// constructor itself is total and never fails.
pub(crate) fn build_teams(roster: &[Player], rng: &mut impl Rng) -> Vec<Team> {
    let mut pool: Vec<Player> = roster.to_vec();
    pool.sort_by(|a, b| b.rating.cmp(&a.rating));

    let mut draft = Draft::new();

    let (mut setters, rest): (Vec<Player>, Vec<Player>) =
        pool.into_iter().partition(|p| p.is_setter());
    setters.shuffle(rng);
    log::debug!("setter seeding: {} setters to place", setters.len());
    let mut remainder = seed_setters(&mut draft, setters);

    let (mut females, males): (Vec<Player>, Vec<Player>) =
        rest.into_iter().partition(|p| p.is_female());
    females.shuffle(rng);
    log::debug!("gender seeding: {} female non-setters to place", females.len());
    remainder.extend(spread_round_robin(&mut draft, females));

    remainder.extend(males);
    log::debug!("snake draft: {} players remaining", remainder.len());
    snake_draft(&mut draft, remainder);

    draft.into_teams()
}

/// First `TEAM_COUNT` setters land on teams 0..2 in shuffled order; each
/// extra goes to the open team with the fewest players (ties resolve to the
/// lowest team index). Setters that fit nowhere fall through to the caller.
fn seed_setters(draft: &mut Draft, setters: Vec<Player>) -> Vec<Player> {
    let mut overflow = Vec::new();
    for (i, setter) in setters.into_iter().enumerate() {
        if i < TEAM_COUNT {
            draft.push(i, setter);
        } else if let Some(team) = draft.fewest_open_team() {
            draft.push(team, setter);
        } else {
            overflow.push(setter);
        }
    }
    overflow
}

/// Deals players round-robin in team-index order, skipping full teams.
/// Returns the players left over once every team is full.
fn spread_round_robin(draft: &mut Draft, players: Vec<Player>) -> Vec<Player> {
    let mut leftover = Vec::new();
    let mut cursor = 0usize;
    for player in players {
        match draft.next_open_round_robin(&mut cursor) {
            Some(team) => draft.push(team, player),
            None => leftover.push(player),
        }
    }
    leftover
}

/// Stage 4: strongest-first snake draft over everything still unassigned.
fn snake_draft(draft: &mut Draft, mut players: Vec<Player>) {
    players.sort_by(|a, b| b.rating.cmp(&a.rating));
    let mut cursor = SnakeCursor::new();
    for player in players {
        match cursor.next_open(draft) {
            Some(team) => draft.push(team, player),
            None => {
                // Unreachable while roster size equals total capacity.
                debug_assert!(false, "snake draft found no open team");
                log::error!(
                    "snake draft found no open team for player id={}; player left unassigned",
                    player.id
                );
            }
        }
    }
}

/// Mutable working state: one growable roster per team, capped at TEAM_SIZE.
struct Draft {
    teams: [Vec<Player>; TEAM_COUNT],
}

impl Draft {
    fn new() -> Self {
        Draft { teams: std::array::from_fn(|_| Vec::with_capacity(TEAM_SIZE)) }
    }

    fn has_capacity(&self, team: usize) -> bool {
        self.teams[team].len() < TEAM_SIZE
    }

    fn push(&mut self, team: usize, player: Player) {
        debug_assert!(self.has_capacity(team), "team {} already full", team);
        self.teams[team].push(player);
    }

    /// Open team with the fewest players; `min_by_key` keeps the first
    /// minimum, so ties resolve to the lowest index.
    fn fewest_open_team(&self) -> Option<usize> {
        (0..TEAM_COUNT)
            .filter(|&t| self.has_capacity(t))
            .min_by_key(|&t| self.teams[t].len())
    }

    /// Next open team in rotating index order, advancing the shared cursor.
    fn next_open_round_robin(&self, cursor: &mut usize) -> Option<usize> {
        for _ in 0..TEAM_COUNT {
            let team = *cursor % TEAM_COUNT;
            *cursor += 1;
            if self.has_capacity(team) {
                return Some(team);
            }
        }
        None
    }

    fn into_teams(self) -> Vec<Team> {
        self.teams
            .into_iter()
            .zip(TEAM_NAMES)
            .map(|(players, name)| Team { name: name.to_string(), players })
            .collect()
    }
}

/// Boustrophedon cursor over team indices. Yields the current team, then
/// advances; at an edge the direction flips without moving, which is what
/// repeats the endpoints (0,1,2,2,1,0,0,...).
struct SnakeCursor {
    idx: usize,
    dir: isize,
}

impl SnakeCursor {
    fn new() -> Self {
        SnakeCursor { idx: 0, dir: 1 }
    }

    fn advance(&mut self) {
        let at_edge =
            (self.dir > 0 && self.idx == TEAM_COUNT - 1) || (self.dir < 0 && self.idx == 0);
        if at_edge {
            self.dir = -self.dir;
        } else {
            self.idx = (self.idx as isize + self.dir) as usize;
        }
    }

    /// Walks the snake until it finds a team with capacity, bounded by one
    /// full period so a full draft terminates instead of spinning.
    fn next_open(&mut self, draft: &Draft) -> Option<usize> {
        for _ in 0..SNAKE_SCAN_LIMIT {
            let team = self.idx;
            self.advance();
            if draft.has_capacity(team) {
                return Some(team);
            }
        }
        None
    }
}
