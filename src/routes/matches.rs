// src/routes/matches.rs
use actix_web::{get, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::match_handler;
use crate::models::matches::{CreateMatchRequest, MatchQuery, RosterRequest};
use crate::services::MatchService;

/// Home feed
#[get("")]
async fn list_matches(
    query: web::Query<MatchQuery>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::list_matches(query, service).await
}

/// Create a match from the create-match form
#[post("")]
async fn create_match(
    request: web::Json<CreateMatchRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, service).await
}

/// Match detail page
#[get("/{match_id}")]
async fn get_match(
    path: web::Path<Uuid>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, service).await
}

#[post("/{match_id}/join")]
async fn join_match(
    path: web::Path<Uuid>,
    request: web::Json<RosterRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::join_match(match_id, request, service).await
}

#[post("/{match_id}/leave")]
async fn leave_match(
    path: web::Path<Uuid>,
    request: web::Json<RosterRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::leave_match(match_id, request, service).await
}
