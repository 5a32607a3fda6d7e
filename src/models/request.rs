/// Validation request and response payloads
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/validate`
#[derive(Debug, Default, Deserialize)]
pub struct ValidateQuery {
    pub hwid: Option<String>,
    pub key: Option<String>,
    pub signature: Option<String>,
}

/// Verification request with every required field present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub hwid: String,
    pub key: String,
    pub signature: String,
}

impl ValidateQuery {
    /// `None` if any of hwid, key or signature is missing or empty
    pub fn into_request(self) -> Option<VerificationRequest> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Some(VerificationRequest {
            hwid: present(self.hwid)?,
            key: present(self.key)?,
            signature: present(self.signature)?,
        })
    }
}

/// JSON body of every validation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidateResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(hwid: Option<&str>, key: Option<&str>, signature: Option<&str>) -> ValidateQuery {
        ValidateQuery {
            hwid: hwid.map(String::from),
            key: key.map(String::from),
            signature: signature.map(String::from),
        }
    }

    #[test]
    fn test_complete_query() {
        let req = query(Some("ABC123"), Some("XYZ"), Some("ab")).into_request().unwrap();
        assert_eq!(req.hwid, "ABC123");
        assert_eq!(req.key, "XYZ");
        assert_eq!(req.signature, "ab");
    }

    #[test]
    fn test_missing_or_empty_fields() {
        assert!(query(None, Some("XYZ"), Some("ab")).into_request().is_none());
        assert!(query(Some("ABC123"), None, Some("ab")).into_request().is_none());
        assert!(query(Some("ABC123"), Some("XYZ"), None).into_request().is_none());
        assert!(query(Some(""), Some("XYZ"), Some("ab")).into_request().is_none());
        assert!(query(Some("ABC123"), Some("XYZ"), Some("")).into_request().is_none());
    }

    #[test]
    fn test_response_serialization() {
        assert_eq!(
            serde_json::to_value(ValidateResponse::ok()).unwrap(),
            serde_json::json!({ "success": true })
        );
        assert_eq!(
            serde_json::to_value(ValidateResponse::failure("forbidden")).unwrap(),
            serde_json::json!({ "success": false, "message": "forbidden" })
        );
    }
}
