/// License record as provisioned in the external license file
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date-time layouts carrying a numeric offset
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Accepted naive date-time layouts, read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// One entry of the license file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    /// Hardware identifier the license is bound to
    pub hardware_id: String,

    /// License key issued for that hardware
    pub key: String,

    /// Expiry as an ISO-8601 date or timestamp string
    pub expiry: String,
}

impl LicenseRecord {
    pub fn new(
        hardware_id: impl Into<String>,
        key: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            hardware_id: hardware_id.into(),
            key: key.into(),
            expiry: expiry.into(),
        }
    }

    /// Exact, case-sensitive match on both identifying fields
    pub fn matches(&self, hwid: &str, key: &str) -> bool {
        self.hardware_id == hwid && self.key == key
    }

    /// Parsed expiry, `None` when the stored value is not a recognised timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        parse_expiry(&self.expiry)
    }

    /// Strictly after expiry counts as expired; an unparseable expiry is expired too.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => now > expires_at,
            None => {
                log::warn!(
                    "Unparseable expiry {:?} for hardware id {}, treating as expired",
                    self.expiry,
                    self.hardware_id
                );
                true
            }
        }
    }
}

/// Parse an expiry string.
///
/// Accepts the ISO-8601 forms a license file may carry:
/// - RFC 3339 timestamps, and date-times down to minute precision with `Z` or an offset;
/// - naive date-times, taken as UTC;
/// - `YYYY-MM-DD`, `YYYY-MM` and `YYYY`, meaning midnight UTC on the first day of the period.
pub fn parse_expiry(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if value.contains('T') {
        let naive = value
            .strip_suffix('Z')
            .or_else(|| value.strip_suffix('z'))
            .unwrap_or(value);
        return NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
            .map(|naive| naive.and_utc());
    }

    let full_date = match value.len() {
        4 if value.bytes().all(|b| b.is_ascii_digit()) => format!("{}-01-01", value),
        7 if value.as_bytes()[4] == b'-' => format!("{}-01", value),
        _ => value.to_string(),
    };

    NaiveDate::parse_from_str(&full_date, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
