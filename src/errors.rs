use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use uuid::Uuid;

use crate::db::RepositoryError;
use crate::matches::roster::RosterError;
use crate::models::common::ApiResponse;

/// Everything a MatchUp operation can fail with, as seen by the pages.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MatchUpError {
    #[error("This match is already full")]
    CapacityExceeded,

    #[error("You have already joined this match")]
    AlreadyJoined,

    #[error("You are not part of this match")]
    NotAJoinedPlayer,

    #[error("{0}")]
    Validation(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("Match has no capacity")]
    DivisionByZero,
}

impl MatchUpError {
    pub fn match_not_found(id: Uuid) -> Self {
        Self::NotFound { kind: "Match", id }
    }

    pub fn venue_not_found(id: Uuid) -> Self {
        Self::NotFound { kind: "Venue", id }
    }

    pub fn player_not_found(id: Uuid) -> Self {
        Self::NotFound { kind: "Player", id }
    }

    /// No marker on the map, even if the match itself exists.
    pub fn marker_not_found(id: Uuid) -> Self {
        Self::NotFound { kind: "Map marker", id }
    }

    /// Stable identifier clients can branch on.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CapacityExceeded => "capacity_exceeded",
            Self::AlreadyJoined => "already_joined",
            Self::NotAJoinedPlayer => "not_a_joined_player",
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::DivisionByZero => "division_by_zero",
        }
    }
}

impl From<RosterError> for MatchUpError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::CapacityExceeded => Self::CapacityExceeded,
            RosterError::AlreadyJoined => Self::AlreadyJoined,
            RosterError::NotAJoinedPlayer => Self::NotAJoinedPlayer,
            RosterError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

impl From<RepositoryError> for MatchUpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { kind, id } => Self::NotFound { kind, id },
            RepositoryError::Rejected(roster_error) => roster_error.into(),
            RepositoryError::Conflict { kind, id } => {
                Self::Validation(format!("{} {} already exists", kind, id))
            }
        }
    }
}

impl ResponseError for MatchUpError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CapacityExceeded | Self::AlreadyJoined | Self::NotAJoinedPlayer => {
                StatusCode::CONFLICT
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DivisionByZero => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::error_with_message(self.to_string(), self.code()))
    }
}
