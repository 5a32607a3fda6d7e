/// Request authentication
pub mod hmac;

pub use hmac::{construct_signature_data, create_signature, verify, verify_signature};
