/// License validation endpoint
/// GET /api/validate?hwid=...&key=...&signature=...
///
/// Headers:
/// - User-Agent: must equal the configured ALLOWED_USER_AGENT
///
/// Signature: hex(HMAC-SHA256(hwid + key, SECRET_KEY))
use actix_web::{http::header, http::Method, web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::errors::ValidationError;
use crate::models::{ValidateQuery, ValidateResponse, VerificationRequest};
use crate::security::verify;
use crate::store::RecordStore;

pub async fn validate_license(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    store: web::Data<dyn RecordStore>,
) -> Result<HttpResponse, ValidationError> {
    let outcome = match authenticate(&req, &config) {
        // File I/O runs on the blocking pool, off the worker thread
        Ok(request) => web::block(move || {
            check_license(store.get_ref(), &request, Utc::now()).map(|()| request)
        })
        .await
        .map_err(|e| ValidationError::StoreUnavailable(e.into()))
        .and_then(|checked| checked),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(request) => {
            log::info!("✅ License validated for hwid {}", request.hwid);
            Ok(HttpResponse::Ok().json(ValidateResponse::ok()))
        }
        Err(ValidationError::StoreUnavailable(e)) => {
            log::error!("❌ License store unavailable: {}", e);
            Err(ValidationError::StoreUnavailable(e))
        }
        Err(e) => {
            log::warn!("❌ Validation rejected ({}) from {}", e, peer(&req));
            Err(e)
        }
    }
}

/// Run every check in order, stopping at the first failure.
pub fn check_request(
    req: &HttpRequest,
    config: &AppConfig,
    store: &dyn RecordStore,
    now: DateTime<Utc>,
) -> Result<VerificationRequest, ValidationError> {
    let request = authenticate(req, config)?;
    check_license(store, &request, now)?;
    Ok(request)
}

/// Request-only checks: method, User-Agent, parameters, signature.
pub fn authenticate(
    req: &HttpRequest,
    config: &AppConfig,
) -> Result<VerificationRequest, ValidationError> {
    if req.method() != Method::GET {
        return Err(ValidationError::MethodNotAllowed);
    }

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    if user_agent != Some(config.allowed_user_agent.as_str()) {
        return Err(ValidationError::InvalidUserAgent);
    }

    let request = web::Query::<ValidateQuery>::from_query(req.query_string())
        .ok()
        .and_then(|q| q.into_inner().into_request())
        .ok_or(ValidationError::MissingParameters)?;

    if !verify(&request.hwid, &request.key, &request.signature, &config.secret_key) {
        return Err(ValidationError::SignatureMismatch);
    }

    Ok(request)
}

/// Store-backed checks: record present and not expired at `now`.
pub fn check_license(
    store: &dyn RecordStore,
    request: &VerificationRequest,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    let record = store
        .find_by_hwid_and_key(&request.hwid, &request.key)?
        .ok_or(ValidationError::InvalidCredentials)?;

    if record.is_expired(now) {
        log::info!("License for hwid {} expired at {}", record.hardware_id, record.expiry);
        return Err(ValidationError::Expired);
    }

    Ok(())
}

fn peer(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
