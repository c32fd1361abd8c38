use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use uuid::Uuid;

use super::log_failure;
use crate::models::common::ApiResponse;
use crate::models::player::{CreatePlayerRequest, UpdateProfileRequest};
use crate::services::ProfileService;

pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    service: web::Data<ProfileService>,
) -> Result<HttpResponse> {
    let player = service
        .create_player(&request)
        .await
        .map_err(|e| log_failure("Creating player", e))?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Player created", player)))
}

#[tracing::instrument(name = "Get profile", skip(service))]
pub async fn get_profile(
    player_id: Uuid,
    service: web::Data<ProfileService>,
) -> Result<HttpResponse> {
    let profile = service
        .get_profile(player_id, Utc::now().date_naive())
        .await
        .map_err(|e| log_failure("Loading profile", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile loaded", profile)))
}

pub async fn update_profile(
    player_id: Uuid,
    request: web::Json<UpdateProfileRequest>,
    service: web::Data<ProfileService>,
) -> Result<HttpResponse> {
    let player = service
        .update_profile(player_id, request.into_inner())
        .await
        .map_err(|e| log_failure("Updating profile", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile updated successfully!", player)))
}
