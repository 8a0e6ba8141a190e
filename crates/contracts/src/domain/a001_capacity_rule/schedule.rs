//! Weekly board grouping for capacity rules.

use serde::{Deserialize, Serialize};

use super::aggregate::{CapacityRule, DayOfWeek};
use crate::shared::validation::parse_hhmm;

/// Board options kept in the query string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CapacityBoardFilter {
    pub show_inactive: bool,
}

/// One column of the weekly board
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub day: DayOfWeek,
    pub rules: Vec<CapacityRule>,
    pub total_standard_slots: u32,
    pub total_emergency_slots: u32,
}

/// Group rules by day. Always returns seven groups, Monday first.
///
/// Rules inside a day are ordered by start time; unparsable times sort last.
/// Totals only count active rules.
pub fn group_by_day(rules: &[CapacityRule], include_inactive: bool) -> Vec<DayGroup> {
    DayOfWeek::ALL
        .iter()
        .map(|day| {
            let mut day_rules: Vec<CapacityRule> = rules
                .iter()
                .filter(|r| r.day_of_week == *day && (include_inactive || r.is_active))
                .cloned()
                .collect();
            day_rules.sort_by_key(|r| (parse_hhmm(&r.start_time).unwrap_or(u32::MAX), r.id.clone()));

            let active = day_rules.iter().filter(|r| r.is_active);
            let (std_total, emg_total) = active.fold((0u32, 0u32), |(s, e), r| {
                (s.saturating_add(r.max_standard_slots), e.saturating_add(r.max_emergency_slots))
            });

            DayGroup {
                day: *day,
                rules: day_rules,
                total_standard_slots: std_total,
                total_emergency_slots: emg_total,
            }
        })
        .collect()
}

/// Weekly totals over active rules: (standard, emergency)
pub fn weekly_totals(groups: &[DayGroup]) -> (u32, u32) {
    groups.iter().fold((0u32, 0u32), |(s, e), g| {
        (s.saturating_add(g.total_standard_slots), e.saturating_add(g.total_emergency_slots))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str, day: u8, start: &str, std: u32, emg: u32, active: bool) -> CapacityRule {
        CapacityRule {
            id: id.to_string(),
            day_of_week: DayOfWeek::new(day).unwrap(),
            start_time: start.to_string(),
            end_time: "23:00".to_string(),
            max_standard_slots: std,
            max_emergency_slots: emg,
            is_active: active,
            notes: None,
        }
    }

    #[test]
    fn test_always_seven_days_in_order() {
        let groups = group_by_day(&[], true);
        assert_eq!(groups.len(), 7);
        assert_eq!(groups[0].day.name(), "Monday");
        assert_eq!(groups[6].day.name(), "Sunday");
        assert!(groups.iter().all(|g| g.rules.is_empty()));
    }

    #[test]
    fn test_sorted_by_start_and_totals() {
        let rules = vec![
            rule("late", 2, "14:00", 2, 1, true),
            rule("early", 2, "08:00", 3, 0, true),
            rule("off", 2, "10:00", 10, 10, false),
            rule("sun", 6, "09:00", 1, 1, true),
        ];
        let groups = group_by_day(&rules, true);
        let wed = &groups[2];
        let ids: Vec<&str> = wed.rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "off", "late"]);
        assert_eq!(wed.total_standard_slots, 5);
        assert_eq!(wed.total_emergency_slots, 1);

        let hidden = group_by_day(&rules, false);
        assert_eq!(hidden[2].rules.len(), 2);

        assert_eq!(weekly_totals(&groups), (6, 2));
    }

    #[test]
    fn test_totals_saturate() {
        let rules = vec![
            rule("a", 0, "08:00", u32::MAX, 1, true),
            rule("b", 0, "12:00", u32::MAX, u32::MAX, true),
            rule("c", 1, "08:00", 5, 0, true),
        ];
        let groups = group_by_day(&rules, false);
        assert_eq!(groups[0].total_standard_slots, u32::MAX);
        assert_eq!(groups[0].total_emergency_slots, u32::MAX);
        assert_eq!(weekly_totals(&groups), (u32::MAX, u32::MAX));
    }
}
