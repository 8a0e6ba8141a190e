use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, ValidationError, ValidationResult};

/// Calendar date on which bookings are disallowed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackoutDate {
    pub id: String,
    pub date: NaiveDate,
    pub reason: String,
    #[serde(default = "default_all_day")]
    pub all_day: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_all_day() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackoutDateDto {
    pub date: Option<NaiveDate>,
    pub reason: String,
    pub all_day: bool,
}

impl Default for BlackoutDateDto {
    fn default() -> Self {
        Self {
            date: None,
            reason: String::new(),
            all_day: true,
        }
    }
}

impl BlackoutDateDto {
    pub fn validate(&self, today: NaiveDate, existing: &[BlackoutDate]) -> ValidationResult {
        let date = self.date.ok_or(ValidationError::Required("Date"))?;
        if date < today {
            return Err(ValidationError::Rule(
                "Blackout dates cannot be in the past".to_string(),
            ));
        }
        if existing.iter().any(|b| b.date == date) {
            return Err(ValidationError::Duplicate("Date"));
        }
        validation::require(&self.reason, "Reason")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlackoutScope {
    #[default]
    Upcoming,
    Past,
    All,
}

impl BlackoutScope {
    pub fn all() -> [BlackoutScope; 3] {
        [BlackoutScope::Upcoming, BlackoutScope::Past, BlackoutScope::All]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlackoutScope::Upcoming => "Upcoming",
            BlackoutScope::Past => "Past",
            BlackoutScope::All => "All",
        }
    }
}

/// Blackout list filter, persisted in the query string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BlackoutFilter {
    pub scope: BlackoutScope,
    pub search: String,
}

/// Apply scope + search. Upcoming (and All) sort ascending, Past sorts newest first.
pub fn apply_filter(items: &[BlackoutDate], filter: &BlackoutFilter, today: NaiveDate) -> Vec<BlackoutDate> {
    let query = filter.search.trim().to_lowercase();
    let mut out: Vec<BlackoutDate> = items
        .iter()
        .filter(|b| match filter.scope {
            BlackoutScope::Upcoming => b.date >= today,
            BlackoutScope::Past => b.date < today,
            BlackoutScope::All => true,
        })
        .filter(|b| query.is_empty() || b.reason.to_lowercase().contains(&query))
        .cloned()
        .collect();

    match filter.scope {
        BlackoutScope::Past => out.sort_by(|a, b| b.date.cmp(&a.date)),
        _ => out.sort_by(|a, b| a.date.cmp(&b.date)),
    }
    out
}

/// Days from `today` until the blackout; negative for past dates
pub fn days_until(item: &BlackoutDate, today: NaiveDate) -> i64 {
    (item.date - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn blackout(id: &str, date: &str, reason: &str) -> BlackoutDate {
        BlackoutDate {
            id: id.to_string(),
            date: d(date),
            reason: reason.to_string(),
            all_day: true,
            created_at: None,
        }
    }

    #[test]
    fn test_scope_and_order() {
        let today = d("2024-06-15");
        let items = vec![
            blackout("1", "2024-12-25", "Christmas"),
            blackout("2", "2024-01-01", "New Year"),
            blackout("3", "2024-06-15", "Stocktake"),
            blackout("4", "2024-05-27", "Memorial Day"),
        ];

        let upcoming = apply_filter(&items, &BlackoutFilter::default(), today);
        let ids: Vec<&str> = upcoming.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);

        let past = apply_filter(
            &items,
            &BlackoutFilter { scope: BlackoutScope::Past, ..Default::default() },
            today,
        );
        let ids: Vec<&str> = past.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "2"]);

        let search = apply_filter(
            &items,
            &BlackoutFilter { scope: BlackoutScope::All, search: "YEAR".into() },
            today,
        );
        assert_eq!(search.len(), 1);
        assert_eq!(days_until(&items[0], today), 193);
    }

    #[test]
    fn test_validation() {
        let today = d("2024-06-15");
        let existing = vec![blackout("1", "2024-07-04", "Independence Day")];
        let mut dto = BlackoutDateDto::default();
        assert_eq!(dto.validate(today, &existing), Err(ValidationError::Required("Date")));

        dto.date = Some(d("2024-06-01"));
        assert!(matches!(dto.validate(today, &existing), Err(ValidationError::Rule(_))));

        dto.date = Some(d("2024-07-04"));
        assert_eq!(dto.validate(today, &existing), Err(ValidationError::Duplicate("Date")));

        dto.date = Some(d("2024-07-05"));
        assert_eq!(dto.validate(today, &existing), Err(ValidationError::Required("Reason")));

        dto.reason = "Staff day".into();
        assert!(dto.validate(today, &existing).is_ok());
    }
}
