// Library exports shared by the server binary and integration tests
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod security;
pub mod store;

use actix_web::web;

/// Path of the license validation endpoint
pub const VALIDATE_PATH: &str = "/api/validate";

/// Register every route. `AppConfig` and `dyn RecordStore` must be provided as app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::liveness))
        .route("/health", web::get().to(handlers::health))
        // All methods reach the handler so it can answer 405 itself
        .route(VALIDATE_PATH, web::route().to(handlers::validate_license));
}
