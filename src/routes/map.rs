// src/routes/map.rs
use actix_web::{get, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::map_handler;
use crate::services::MapService;

/// Markers and viewport for the map page
#[get("")]
async fn get_map(service: web::Data<MapService>) -> Result<HttpResponse> {
    map_handler::get_map(service).await
}

/// Resolve a clicked marker to the match it stands for
#[post("/markers/{marker_id}/select")]
async fn select_marker(
    path: web::Path<Uuid>,
    service: web::Data<MapService>,
) -> Result<HttpResponse> {
    map_handler::select_marker(path.into_inner(), service).await
}
