mod health;
pub mod validate;

pub use health::{health, liveness};
pub use validate::{authenticate, check_license, check_request, validate_license};
