use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use super::log_failure;
use crate::models::common::ApiResponse;
use crate::services::MapService;

pub async fn get_map(service: web::Data<MapService>) -> Result<HttpResponse> {
    let view = service
        .map_view()
        .await
        .map_err(|e| log_failure("Rendering map", e))?;

    let message = if view.access_token_configured {
        format!("{} match locations", view.markers.len())
    } else {
        "No map access token configured".to_string()
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(message, view)))
}

#[tracing::instrument(name = "Select map marker", skip(service))]
pub async fn select_marker(
    marker_id: Uuid,
    service: web::Data<MapService>,
) -> Result<HttpResponse> {
    let selection = service
        .select_marker(marker_id)
        .await
        .map_err(|e| log_failure("Selecting marker", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Marker selected", selection)))
}
