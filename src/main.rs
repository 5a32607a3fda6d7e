use license_server::config::AppConfig;
use license_server::configure_routes;
use license_server::store::{JsonFileStore, RecordStore};

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!("🚀 Starting license server at {}:{}", config.host, config.port);
    log::info!("📄 License file: {}", config.license_file.display());

    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(config.license_file.clone()));
    let store = web::Data::from(store);
    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(config.clone())
            .app_data(store.clone())
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
