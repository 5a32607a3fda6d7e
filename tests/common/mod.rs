// Common test utilities for server integration tests

use std::io::Write;
use std::sync::Arc;

use actix_web::web;
use license_server::config::AppConfig;
use license_server::security::{construct_signature_data, create_signature};
use license_server::store::{JsonFileStore, RecordStore};
use tempfile::NamedTempFile;

pub const SECRET: &str = "s3cret";
pub const USER_AGENT: &str = "LicenseClient/1.0";

/// Config pointing at `license_file`
pub fn test_config(license_file: &std::path::Path) -> AppConfig {
    AppConfig::from_lookup(|name| match name {
        "SECRET_KEY" => Some(SECRET.to_string()),
        "ALLOWED_USER_AGENT" => Some(USER_AGENT.to_string()),
        "LICENSE_FILE" => Some(license_file.display().to_string()),
        _ => None,
    })
    .expect("test config is complete")
}

/// Write a license file holding the given (hwid, key, expiry) entries
pub fn license_file(entries: &[(&str, &str, &str)]) -> NamedTempFile {
    let records: Vec<serde_json::Value> = entries
        .iter()
        .map(|(hwid, key, expiry)| {
            serde_json::json!({ "hardwareId": hwid, "key": key, "expiry": expiry })
        })
        .collect();

    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(serde_json::to_string(&records).unwrap().as_bytes())
        .expect("write license file");
    file
}

/// Write a license file with arbitrary contents
pub fn raw_license_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write license file");
    file
}

/// App data for a JSON file store at the configured path
pub fn app_data(config: AppConfig) -> (web::Data<AppConfig>, web::Data<dyn RecordStore>) {
    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(config.license_file.clone()));
    (web::Data::new(config), web::Data::from(store))
}

/// Hex HMAC the server expects for (hwid, key)
pub fn sign(hwid: &str, key: &str) -> String {
    create_signature(&construct_signature_data(hwid, key), SECRET).unwrap()
}

pub fn validate_uri(hwid: &str, key: &str, signature: &str) -> String {
    format!(
        "{}?hwid={}&key={}&signature={}",
        license_server::VALIDATE_PATH,
        hwid,
        key,
        signature
    )
}
