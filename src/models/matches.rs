// src/models/matches.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::player::PlayerSummary;
use crate::models::venue::Venue;

/// A scheduled match. Only the roster changes after creation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Match {
    pub id: Uuid,
    pub title: String,
    pub scheduled_at: NaiveDateTime,
    pub venue_id: Uuid,
    pub(crate) max_players: u32,
    pub(crate) roster: Vec<Uuid>,
    pub description: Option<String>,
    pub host_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Fields for a match that passed form validation but has no identity yet.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub title: String,
    pub scheduled_at: NaiveDateTime,
    pub venue_id: Uuid,
    pub max_players: u32,
    pub description: Option<String>,
    pub host_id: Uuid,
}

impl Match {
    pub fn new(new_match: NewMatch) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new_match.title,
            scheduled_at: new_match.scheduled_at,
            venue_id: new_match.venue_id,
            max_players: new_match.max_players,
            roster: Vec::new(),
            description: new_match.description,
            host_id: new_match.host_id,
            created_at: Utc::now(),
        }
    }

    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    /// Joined players, in join order.
    pub fn roster(&self) -> &[Uuid] {
        &self.roster
    }

    pub fn has_player(&self, player_id: Uuid) -> bool {
        self.roster.contains(&player_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Open,
    Full,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Open => write!(f, "open"),
            MatchStatus::Full => write!(f, "full"),
        }
    }
}

/// Body of the create-match form. Everything is optional at the serde level
/// so that missing fields surface as validation errors, not parse errors.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub venue_id: Option<Uuid>,
    pub max_players: Option<u32>,
    pub description: Option<String>,
    pub host_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct RosterRequest {
    pub player_id: Uuid,
}

/// Home feed filters.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct MatchQuery {
    pub status: Option<MatchStatus>,
    pub venue_id: Option<Uuid>,
    pub from: Option<NaiveDate>,
}

/// One card on the home feed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchCard {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    pub time: String,
    pub venue_id: Uuid,
    pub venue_name: Option<String>,
    pub current_players: u32,
    pub max_players: u32,
    pub status: MatchStatus,
    pub occupancy_ratio: f64,
}

/// Everything the match detail page shows.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub card: MatchCard,
    pub description: Option<String>,
    pub venue: Option<Venue>,
    pub host: Option<PlayerSummary>,
    pub players: Vec<PlayerSummary>,
    pub spots_left: u32,
}

