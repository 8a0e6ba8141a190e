use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DigestFrequency {
    #[default]
    None,
    Daily,
    Weekly,
}

impl DigestFrequency {
    pub fn all() -> [DigestFrequency; 3] {
        [DigestFrequency::None, DigestFrequency::Daily, DigestFrequency::Weekly]
    }

    pub fn code(&self) -> &'static str {
        match self {
            DigestFrequency::None => "none",
            DigestFrequency::Daily => "daily",
            DigestFrequency::Weekly => "weekly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DigestFrequency::None => "No digest",
            DigestFrequency::Daily => "Daily summary",
            DigestFrequency::Weekly => "Weekly summary",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "daily" => DigestFrequency::Daily,
            "weekly" => DigestFrequency::Weekly,
            _ => DigestFrequency::None,
        }
    }
}

/// Per-staff notification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub email_new_booking: bool,
    pub email_emergency_booking: bool,
    pub email_low_stock: bool,
    pub email_new_inquiry: bool,
    pub sms_emergency_booking: bool,
    pub digest: DigestFrequency,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_new_booking: true,
            email_emergency_booking: true,
            email_low_stock: false,
            email_new_inquiry: true,
            sms_emergency_booking: false,
            digest: DigestFrequency::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_uses_defaults() {
        let prefs: NotificationPreferences =
            serde_json::from_str(r#"{"email_low_stock": true, "digest": "weekly"}"#).unwrap();
        assert!(prefs.email_low_stock);
        assert!(prefs.email_new_booking);
        assert_eq!(prefs.digest, DigestFrequency::Weekly);
    }
}
