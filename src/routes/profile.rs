// src/routes/profile.rs
use actix_web::{get, post, put, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::profile_handler;
use crate::models::player::{CreatePlayerRequest, UpdateProfileRequest};
use crate::services::ProfileService;

#[post("/players")]
async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    service: web::Data<ProfileService>,
) -> Result<HttpResponse> {
    profile_handler::create_player(request, service).await
}

/// Profile page: player, stats and upcoming matches
#[get("/profile/{player_id}")]
async fn get_profile(
    path: web::Path<Uuid>,
    service: web::Data<ProfileService>,
) -> Result<HttpResponse> {
    profile_handler::get_profile(path.into_inner(), service).await
}

#[put("/profile/{player_id}")]
async fn update_profile(
    path: web::Path<Uuid>,
    request: web::Json<UpdateProfileRequest>,
    service: web::Data<ProfileService>,
) -> Result<HttpResponse> {
    profile_handler::update_profile(path.into_inner(), request, service).await
}
