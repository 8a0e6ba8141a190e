use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, ValidationError, ValidationResult};

/// Day of week as stored by the backend: 0 = Monday .. 6 = Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek(0),
        DayOfWeek(1),
        DayOfWeek(2),
        DayOfWeek(3),
        DayOfWeek(4),
        DayOfWeek(5),
        DayOfWeek(6),
    ];

    pub fn new(index: u8) -> Option<Self> {
        (index < 7).then_some(Self(index))
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "Monday",
            1 => "Tuesday",
            2 => "Wednesday",
            3 => "Thursday",
            4 => "Friday",
            5 => "Saturday",
            _ => "Sunday",
        }
    }

    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    pub fn from_chrono(day: chrono::Weekday) -> Self {
        Self(day.num_days_from_monday() as u8)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DayOfWeek::new(value).ok_or_else(|| format!("Invalid day of week: {}", value))
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

/// Capacity rule: maximum bookings for a day-of-week time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityRule {
    pub id: String,
    pub day_of_week: DayOfWeek,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    pub max_standard_slots: u32,
    pub max_emergency_slots: u32,
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CapacityRule {
    pub fn window_label(&self) -> String {
        format!("{} – {}", self.start_time, self.end_time)
    }
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityRuleDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub max_standard_slots: u32,
    pub max_emergency_slots: u32,
    pub is_active: bool,
    pub notes: Option<String>,
}

impl CapacityRuleDto {
    pub fn new_for_day(day: DayOfWeek) -> Self {
        Self {
            id: None,
            day_of_week: day,
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            max_standard_slots: 4,
            max_emergency_slots: 1,
            is_active: true,
            notes: None,
        }
    }

    pub fn from_rule(rule: &CapacityRule) -> Self {
        Self {
            id: Some(rule.id.clone()),
            day_of_week: rule.day_of_week,
            start_time: rule.start_time.clone(),
            end_time: rule.end_time.clone(),
            max_standard_slots: rule.max_standard_slots,
            max_emergency_slots: rule.max_emergency_slots,
            is_active: rule.is_active,
            notes: rule.notes.clone(),
        }
    }

    /// Field-level checks plus overlap against the other rules of the same day
    pub fn validate(&self, existing: &[CapacityRule]) -> ValidationResult {
        let start = validation::require_time(&self.start_time, "Start time")?;
        let end = validation::require_time(&self.end_time, "End time")?;
        if end <= start {
            return Err(ValidationError::TimeRange);
        }
        if self.max_standard_slots == 0 && self.max_emergency_slots == 0 {
            return Err(ValidationError::Rule(
                "At least one standard or emergency slot is required".to_string(),
            ));
        }
        if let Some(other) = find_overlap(self, existing) {
            return Err(ValidationError::Rule(format!(
                "Overlaps the {} rule {}",
                other.day_of_week.name(),
                other.window_label()
            )));
        }
        Ok(())
    }
}

/// First active rule on the same day whose window intersects the dto's window.
/// The rule being edited (same id) is ignored.
pub fn find_overlap<'a>(dto: &CapacityRuleDto, existing: &'a [CapacityRule]) -> Option<&'a CapacityRule> {
    if !dto.is_active {
        return None;
    }
    let start = validation::parse_hhmm(&dto.start_time)?;
    let end = validation::parse_hhmm(&dto.end_time)?;

    existing.iter().find(|rule| {
        if !rule.is_active || rule.day_of_week != dto.day_of_week {
            return false;
        }
        if dto.id.as_deref() == Some(rule.id.as_str()) {
            return false;
        }
        match (
            validation::parse_hhmm(&rule.start_time),
            validation::parse_hhmm(&rule.end_time),
        ) {
            (Some(s), Some(e)) => start < e && s < end,
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn rule(id: &str, day: u8, start: &str, end: &str, active: bool) -> CapacityRule {
        CapacityRule {
            id: id.to_string(),
            day_of_week: DayOfWeek::new(day).unwrap(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            max_standard_slots: 3,
            max_emergency_slots: 1,
            is_active: active,
            notes: None,
        }
    }

    #[test]
    fn test_day_of_week_serde() {
        let r: CapacityRule = serde_json::from_str(
            r#"{"id":"r1","day_of_week":4,"start_time":"08:00","end_time":"12:00",
                "max_standard_slots":5,"max_emergency_slots":2,"is_active":true}"#,
        )
        .unwrap();
        assert_eq!(r.day_of_week.name(), "Friday");
        assert!(serde_json::from_str::<DayOfWeek>("7").is_err());
        assert_eq!(serde_json::to_string(&r.day_of_week).unwrap(), "4");
    }

    #[test]
    fn test_validate_time_range() {
        let mut dto = CapacityRuleDto::new_for_day(DayOfWeek::new(0).unwrap());
        dto.start_time = "12:00".into();
        dto.end_time = "11:00".into();
        assert_eq!(dto.validate(&[]), Err(ValidationError::TimeRange));
        dto.end_time = "1pm".into();
        assert_eq!(dto.validate(&[]), Err(ValidationError::InvalidTime("End time")));
    }

    #[test]
    fn test_overlap_detection() {
        let existing = vec![
            rule("a", 0, "08:00", "12:00", true),
            rule("b", 0, "13:00", "17:00", false),
            rule("c", 1, "08:00", "12:00", true),
        ];
        let mut dto = CapacityRuleDto::new_for_day(DayOfWeek::new(0).unwrap());
        dto.start_time = "11:00".into();
        dto.end_time = "14:00".into();
        assert_eq!(find_overlap(&dto, &existing).map(|r| r.id.as_str()), Some("a"));
        assert!(dto.validate(&existing).is_err());

        // Touching windows do not overlap
        dto.start_time = "12:00".into();
        assert!(find_overlap(&dto, &existing).is_none());

        // Editing rule "a" itself
        let mut edit = CapacityRuleDto::from_rule(&existing[0]);
        edit.end_time = "12:30".into();
        assert!(edit.validate(&existing).is_ok());
    }

    #[test]
    fn test_requires_some_slots() {
        let mut dto = CapacityRuleDto::new_for_day(DayOfWeek::new(2).unwrap());
        dto.max_standard_slots = 0;
        dto.max_emergency_slots = 0;
        assert!(matches!(dto.validate(&[]), Err(ValidationError::Rule(_))));
    }
}
