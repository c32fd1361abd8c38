use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use super::log_failure;
use crate::models::common::ApiResponse;
use crate::models::venue::{CreateVenueRequest, UpdateVenueRequest};
use crate::services::VenueDirectory;

pub async fn list_venues(directory: web::Data<VenueDirectory>) -> Result<HttpResponse> {
    let venues = directory
        .list_venues()
        .await
        .map_err(|e| log_failure("Listing venues", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Found {} places", venues.len()),
        venues,
    )))
}

pub async fn get_venue(
    venue_id: Uuid,
    directory: web::Data<VenueDirectory>,
) -> Result<HttpResponse> {
    let venue = directory
        .get_venue(venue_id)
        .await
        .map_err(|e| log_failure("Loading venue", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Place loaded", venue)))
}

pub async fn add_venue(
    request: web::Json<CreateVenueRequest>,
    directory: web::Data<VenueDirectory>,
) -> Result<HttpResponse> {
    let venue = directory
        .add_venue(&request)
        .await
        .map_err(|e| log_failure("Adding venue", e))?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Place added successfully!", venue)))
}

pub async fn update_venue(
    venue_id: Uuid,
    request: web::Json<UpdateVenueRequest>,
    directory: web::Data<VenueDirectory>,
) -> Result<HttpResponse> {
    let venue = directory
        .update_venue(venue_id, request.into_inner())
        .await
        .map_err(|e| log_failure("Updating venue", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Place updated successfully!", venue)))
}

pub async fn remove_venue(
    venue_id: Uuid,
    directory: web::Data<VenueDirectory>,
) -> Result<HttpResponse> {
    directory
        .remove_venue(venue_id)
        .await
        .map_err(|e| log_failure("Removing venue", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Place deleted successfully!")))
}
