use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, ValidationError, ValidationResult};

pub const MAX_SURCHARGE_PERCENT: i64 = 500;
pub const MAX_NOTICE_HOURS: i64 = 168;

/// Emergency (rush) booking settings. Singleton record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencySettings {
    pub enabled: bool,
    pub surcharge_percent: f64,
    pub min_notice_hours: u32,
    pub max_per_day: u32,
    pub contact_phone: String,
    pub notice_message: String,
}

impl Default for EmergencySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            surcharge_percent: 50.0,
            min_notice_hours: 4,
            max_per_day: 2,
            contact_phone: String::new(),
            notice_message: String::new(),
        }
    }
}

impl EmergencySettings {
    pub fn validate(&self) -> ValidationResult {
        validation::in_range(self.surcharge_percent, 0, MAX_SURCHARGE_PERCENT, "Surcharge")?;
        validation::in_range(self.min_notice_hours as f64, 0, MAX_NOTICE_HOURS, "Minimum notice")?;
        if self.enabled {
            if self.max_per_day == 0 {
                return Err(ValidationError::Rule(
                    "Allow at least one emergency booking per day or disable emergency bookings"
                        .to_string(),
                ));
            }
            validation::require(&self.contact_phone, "Emergency contact phone")?;
        }
        Ok(())
    }

    /// Price of a job with the emergency surcharge applied
    pub fn apply_surcharge(&self, base_price: f64) -> f64 {
        crate::shared::money::round_cents(base_price * (1.0 + self.surcharge_percent / 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut s = EmergencySettings::default();
        assert!(s.validate().is_ok());

        s.enabled = true;
        assert_eq!(s.validate(), Err(ValidationError::Required("Emergency contact phone")));

        s.contact_phone = "+1 555 0100".into();
        assert!(s.validate().is_ok());

        s.surcharge_percent = 600.0;
        assert!(matches!(s.validate(), Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_surcharge() {
        let s = EmergencySettings { surcharge_percent: 25.0, ..Default::default() };
        assert_eq!(s.apply_surcharge(200.0), 250.0);
    }
}
