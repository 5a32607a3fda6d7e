pub mod license;
pub mod request;

pub use license::{parse_expiry, LicenseRecord};
pub use request::{ValidateQuery, ValidateResponse, VerificationRequest};
