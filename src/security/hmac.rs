/// HMAC-SHA256 request signing for license validation
/// Clients sign `hwid || key` with the shared secret and send the hex digest.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Generate HMAC-SHA256 signature
///
/// # Arguments
/// * `data` - Data to sign (hwid followed by key)
/// * `secret` - Shared secret key
///
/// # Returns
/// Lowercase hex-encoded signature string
pub fn create_signature(data: &str, secret: &str) -> Result<String, String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| format!("Invalid secret key: {}", e))?;

    mac.update(data.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify HMAC-SHA256 signature in constant time
pub fn verify_signature(data: &str, secret: &str, signature: &str) -> bool {
    let expected = match create_signature(data, secret) {
        Ok(sig) => sig,
        Err(e) => {
            log::error!("Failed to create signature: {}", e);
            return false;
        }
    };

    let signature_bytes = signature.as_bytes();
    let expected_bytes = expected.as_bytes();

    if signature_bytes.len() != expected_bytes.len() {
        return false;
    }

    signature_bytes.ct_eq(expected_bytes).into()
}

/// Construct the signed payload: hwid immediately followed by key, no separator
pub fn construct_signature_data(hwid: &str, key: &str) -> String {
    format!("{}{}", hwid, key)
}

/// Check that `signature` is the HMAC of `hwid || key` under `secret`
pub fn verify(hwid: &str, key: &str, signature: &str, secret: &str) -> bool {
    verify_signature(&construct_signature_data(hwid, key), secret, signature)
}
