use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod config;
pub mod db;
pub mod errors;
mod handlers;
pub mod matches;
pub mod models;
mod routes;
pub mod services;
pub mod telemetry;

use crate::config::settings::Settings;
use crate::db::MemoryStorage;
use crate::handlers::{json_error_handler, query_error_handler};
use crate::routes::init_routes;
use crate::services::{BrowserMapAdapter, MapService, MatchService, ProfileService, VenueDirectory};

pub fn run(
    listener: TcpListener,
    storage: Arc<MemoryStorage>,
    settings: &Settings,
) -> Result<Server, std::io::Error> {
    // Every service gets the same store; web::Data is an Arc underneath
    let match_service = web::Data::new(MatchService::new(
        storage.clone(),
        storage.clone(),
        storage.clone(),
        &settings.matches,
    ));
    let venue_directory = web::Data::new(VenueDirectory::new(storage.clone()));
    let profile_service = web::Data::new(ProfileService::new(
        storage.clone(),
        storage.clone(),
        storage.clone(),
    ));
    let map_service = web::Data::new(MapService::new(
        storage.clone(),
        storage.clone(),
        Arc::new(BrowserMapAdapter::new(settings.map.clone())),
    ));
    let allowed_origins = settings.application.allowed_origins.clone();

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(match_service.clone())
            .app_data(venue_directory.clone())
            .app_data(profile_service.clone())
            .app_data(map_service.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
