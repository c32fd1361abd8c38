use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use super::log_failure;
use crate::models::common::ApiResponse;
use crate::models::matches::{CreateMatchRequest, MatchQuery, RosterRequest};
use crate::services::MatchService;

#[tracing::instrument(name = "List matches", skip(service))]
pub async fn list_matches(
    query: web::Query<MatchQuery>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let cards = service
        .list_matches(&query)
        .await
        .map_err(|e| log_failure("Listing matches", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Found {} matches", cards.len()),
        cards,
    )))
}

#[tracing::instrument(name = "Get match detail", skip(service))]
pub async fn get_match(
    match_id: Uuid,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let detail = service
        .get_match_detail(match_id)
        .await
        .map_err(|e| log_failure("Loading match", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Match loaded", detail)))
}

pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let detail = service
        .create_match(&request)
        .await
        .map_err(|e| log_failure("Creating match", e))?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Match created successfully!", detail)))
}

#[tracing::instrument(
    name = "Join match request",
    skip(request, service),
    fields(player_id = %request.player_id)
)]
pub async fn join_match(
    match_id: Uuid,
    request: web::Json<RosterRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let detail = service
        .join_match(match_id, request.player_id)
        .await
        .map_err(|e| log_failure("Joining match", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("You've joined the match!", detail)))
}

#[tracing::instrument(
    name = "Leave match request",
    skip(request, service),
    fields(player_id = %request.player_id)
)]
pub async fn leave_match(
    match_id: Uuid,
    request: web::Json<RosterRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let detail = service
        .leave_match(match_id, request.player_id)
        .await
        .map_err(|e| log_failure("Leaving match", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("You've left the match", detail)))
}
