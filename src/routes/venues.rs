// src/routes/venues.rs
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::venue_handler;
use crate::models::venue::{CreateVenueRequest, UpdateVenueRequest};
use crate::services::VenueDirectory;

/// Places for the create-match picker
#[get("/venues")]
async fn list_venues(directory: web::Data<VenueDirectory>) -> Result<HttpResponse> {
    venue_handler::list_venues(directory).await
}

#[get("/venues")]
async fn admin_list_venues(directory: web::Data<VenueDirectory>) -> Result<HttpResponse> {
    venue_handler::list_venues(directory).await
}

#[post("/venues")]
async fn admin_add_venue(
    request: web::Json<CreateVenueRequest>,
    directory: web::Data<VenueDirectory>,
) -> Result<HttpResponse> {
    venue_handler::add_venue(request, directory).await
}

#[get("/venues/{venue_id}")]
async fn admin_get_venue(
    path: web::Path<Uuid>,
    directory: web::Data<VenueDirectory>,
) -> Result<HttpResponse> {
    venue_handler::get_venue(path.into_inner(), directory).await
}

#[put("/venues/{venue_id}")]
async fn admin_update_venue(
    path: web::Path<Uuid>,
    request: web::Json<UpdateVenueRequest>,
    directory: web::Data<VenueDirectory>,
) -> Result<HttpResponse> {
    venue_handler::update_venue(path.into_inner(), request, directory).await
}

#[delete("/venues/{venue_id}")]
async fn admin_remove_venue(
    path: web::Path<Uuid>,
    directory: web::Data<VenueDirectory>,
) -> Result<HttpResponse> {
    venue_handler::remove_venue(path.into_inner(), directory).await
}
