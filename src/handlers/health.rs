use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::store::RecordStore;

/// Liveness probe, `GET /`
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("on")
}

/// Readiness of the license store, `GET /health`
///
/// 200 with the record count when the store loads, 503 otherwise.
pub async fn health(store: web::Data<dyn RecordStore>) -> HttpResponse {
    let checked_at = chrono::Utc::now().to_rfc3339();

    match web::block(move || store.record_count()).await {
        Ok(Ok(records)) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "license_store": "ok",
            "records": records,
            "timestamp": checked_at
        })),
        Ok(Err(e)) => {
            log::error!("Health check: license store unavailable: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "degraded",
                "license_store": "unavailable",
                "timestamp": checked_at
            }))
        }
        Err(e) => {
            log::error!("Health check aborted: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "degraded",
                "license_store": "unknown",
                "timestamp": checked_at
            }))
        }
    }
}
