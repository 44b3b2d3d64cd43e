//! Signup intake.
//!
//! Turns raw attendance responses into the session roster: first come,
//! first served, capped at the session capacity, everyone else on the
//! waitlist. Storage of responses lives outside this crate; this module
//! only implements the cut.

use crate::models::{PlayerId, TEAM_COUNT, TEAM_SIZE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default session capacity, one full 3x6 session.
pub const ROSTER_CAPACITY: usize = TEAM_COUNT * TEAM_SIZE;

/// One attendance response. `responded_at` is the server-side timestamp of
/// the response; a player answering again produces a fresh signup with a
/// later timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Signup {
    pub player_id: PlayerId,
    pub responded_at: DateTime<Utc>,
}

/// Outcome of the roster cut, both halves in arrival order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterCut {
    pub confirmed: Vec<PlayerId>,
    pub waitlist: Vec<PlayerId>,
}

/// Cuts the signup list down to `capacity` confirmed players.
///
/// Duplicate responses collapse to the LATEST one, matching how re-answering
/// a poll refreshes the stored response. The survivors are ordered by
/// `(responded_at, player_id)` ascending, so answering again after a change
/// of heart costs the original queue spot.
pub fn cut_roster(signups: &[Signup], capacity: usize) -> RosterCut {
    let mut latest: HashMap<PlayerId, DateTime<Utc>> = HashMap::new();
    for signup in signups {
        let entry = latest.entry(signup.player_id).or_insert(signup.responded_at);
        if signup.responded_at > *entry {
            *entry = signup.responded_at;
        }
    }

    let mut ordered: Vec<(PlayerId, DateTime<Utc>)> = latest.into_iter().collect();
    ordered.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut confirmed: Vec<PlayerId> = ordered.into_iter().map(|(id, _)| id).collect();
    let waitlist = confirmed.split_off(confirmed.len().min(capacity));
    RosterCut { confirmed, waitlist }
}
