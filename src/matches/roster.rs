//! Capacity and membership rules for a match roster.
//!
//! Every function here is pure: it takes a match by reference and hands back
//! a new value, so the caller decides when (and whether) to store it.
use uuid::Uuid;

use crate::models::matches::{Match, MatchStatus};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster is already at capacity")]
    CapacityExceeded,

    #[error("player is already on the roster")]
    AlreadyJoined,

    #[error("player is not on the roster")]
    NotAJoinedPlayer,

    #[error("match capacity is zero")]
    DivisionByZero,
}

/// Add `player_id` to the end of the roster.
///
/// A full match is rejected before membership is checked, so a player who is
/// already on a full match gets `CapacityExceeded`.
pub fn join(game: &Match, player_id: Uuid) -> Result<Match, RosterError> {
    if game.roster.len() >= game.max_players as usize {
        return Err(RosterError::CapacityExceeded);
    }
    if game.roster.contains(&player_id) {
        return Err(RosterError::AlreadyJoined);
    }

    let mut updated = game.clone();
    updated.roster.push(player_id);
    Ok(updated)
}

/// Remove `player_id` from the roster, keeping the order of everyone else.
pub fn leave(game: &Match, player_id: Uuid) -> Result<Match, RosterError> {
    let position = game
        .roster
        .iter()
        .position(|id| *id == player_id)
        .ok_or(RosterError::NotAJoinedPlayer)?;

    let mut updated = game.clone();
    updated.roster.remove(position);
    Ok(updated)
}

pub fn status(game: &Match) -> MatchStatus {
    if game.roster.len() >= game.max_players as usize {
        MatchStatus::Full
    } else {
        MatchStatus::Open
    }
}

/// Fraction of the roster that is filled, in `[0, 1]`.
pub fn occupancy_ratio(game: &Match) -> Result<f64, RosterError> {
    if game.max_players == 0 {
        return Err(RosterError::DivisionByZero);
    }
    let ratio = game.roster.len() as f64 / game.max_players as f64;
    Ok(ratio.min(1.0))
}

pub fn spots_left(game: &Match) -> u32 {
    game.max_players.saturating_sub(game.roster.len() as u32)
}
