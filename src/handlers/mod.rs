use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, ResponseError};

use crate::errors::MatchUpError;

pub mod backend_health_handler;
pub mod map_handler;
pub mod match_handler;
pub mod profile_handler;
pub mod venue_handler;

/// Log a failed operation at a level matching who is to blame, then hand the
/// error back so actix renders it.
pub(crate) fn log_failure(action: &str, err: MatchUpError) -> MatchUpError {
    if err.status_code().is_server_error() {
        tracing::error!("{} failed: {}", action, err);
    } else {
        tracing::warn!("{} rejected: {}", action, err);
    }
    err
}

/// Malformed JSON bodies answer with the same envelope as form validation.
pub(crate) fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!("Rejected body for {}: {}", req.path(), err);
    MatchUpError::Validation(err.to_string()).into()
}

pub(crate) fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!("Rejected query for {}: {}", req.path(), err);
    MatchUpError::Validation(err.to_string()).into()
}
