use actix_web::web;

pub mod backend_health;
pub mod map;
pub mod matches;
pub mod profile;
pub mod venues;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(venues::list_venues)
        .service(profile::create_player)
        .service(profile::get_profile)
        .service(profile::update_profile);

    cfg.service(
        web::scope("/matches")
            .service(matches::list_matches)
            .service(matches::create_match)
            .service(matches::get_match)
            .service(matches::join_match)
            .service(matches::leave_match)
    );
    // Admin panel: place management
    cfg.service(
        web::scope("/admin")
            .service(venues::admin_list_venues)
            .service(venues::admin_add_venue)
            .service(venues::admin_get_venue)
            .service(venues::admin_update_venue)
            .service(venues::admin_remove_venue)
    );
    cfg.service(
        web::scope("/map")
            .service(map::get_map)
            .service(map::select_marker)
    );
}
