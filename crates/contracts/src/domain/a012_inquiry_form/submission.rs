use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aggregate::{FieldKind, InquiryForm};
use crate::shared::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    New,
    Contacted,
    Closed,
}

impl SubmissionStatus {
    pub fn all() -> [SubmissionStatus; 3] {
        [
            SubmissionStatus::New,
            SubmissionStatus::Contacted,
            SubmissionStatus::Closed,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Contacted => "contacted",
            SubmissionStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "New",
            SubmissionStatus::Contacted => "Contacted",
            SubmissionStatus::Closed => "Closed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquirySubmission {
    pub id: String,
    pub form_id: String,
    #[serde(default)]
    pub form_name: Option<String>,
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: SubmissionStatus,
}

impl InquirySubmission {
    /// Value rendered as plain text; strings unquoted.
    pub fn value_text(&self, key: &str) -> String {
        match self.values.get(key) {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// First email-looking value, used as the list's contact column
    pub fn contact(&self) -> Option<String> {
        self.values
            .values()
            .filter_map(|v| v.as_str())
            .find(|s| validation::is_valid_email(s))
            .map(String::from)
    }
}

/// `POST /api/inquiry-forms/{id}/submissions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubmitInquiryDto {
    pub values: BTreeMap<String, String>,
}

/// `PUT /api/inquiry-submissions/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubmissionStatusDto {
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub form_id: Option<String>,
}

pub fn filter_submissions(items: &[InquirySubmission], filter: &SubmissionFilter) -> Vec<InquirySubmission> {
    let mut out: Vec<InquirySubmission> = items
        .iter()
        .filter(|s| filter.status.map_or(true, |st| s.status == st))
        .filter(|s| filter.form_id.as_deref().map_or(true, |f| s.form_id == f))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

/// Checks submitted values against the form definition.
///
/// Returns every failing field as `(key, message)` in field order.
pub fn validate_submission(
    form: &InquiryForm,
    values: &BTreeMap<String, String>,
) -> Result<(), Vec<(String, String)>> {
    let mut errors = Vec::new();
    for field in &form.fields {
        let value = values.get(&field.key).map(|v| v.trim()).unwrap_or("");
        if value.is_empty() {
            if field.required {
                errors.push((field.key.clone(), format!("{} is required", field.label)));
            }
            continue;
        }
        let problem = match field.kind {
            FieldKind::Email if !validation::is_valid_email(value) => {
                Some("Enter a valid email address".to_string())
            }
            FieldKind::Number if value.parse::<f64>().map_or(true, |n| !n.is_finite()) => {
                Some("Enter a number".to_string())
            }
            FieldKind::Date if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() => {
                Some("Enter a valid date".to_string())
            }
            FieldKind::Phone
                if value.chars().filter(|c| c.is_ascii_digit()).count() < 7 =>
            {
                Some("Enter a valid phone number".to_string())
            }
            FieldKind::Select if !field.options.iter().any(|o| o.trim() == value) => {
                Some("Choose one of the listed options".to_string())
            }
            _ => None,
        };
        if let Some(message) = problem {
            errors.push((field.key.clone(), message));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a012_inquiry_form::aggregate::FormField;

    fn form() -> InquiryForm {
        let f = |key: &str, kind: FieldKind, required: bool, options: &[&str]| FormField {
            key: key.into(),
            label: key.to_uppercase(),
            kind,
            required,
            options: options.iter().map(|o| o.to_string()).collect(),
            placeholder: None,
        };
        InquiryForm {
            id: "f1".into(),
            name: "Contact".into(),
            slug: "contact".into(),
            fields: vec![
                f("name", FieldKind::Text, true, &[]),
                f("email", FieldKind::Email, true, &[]),
                f("qty", FieldKind::Number, false, &[]),
                f("topic", FieldKind::Select, false, &["Signs", "Banners"]),
                f("when", FieldKind::Date, false, &[]),
            ],
            is_active: true,
            ..Default::default()
        }
    }

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_valid_submission() {
        let v = values(&[("name", "Ann"), ("email", "ann@example.com"), ("topic", "Signs")]);
        assert!(validate_submission(&form(), &v).is_ok());
    }

    #[test]
    fn test_invalid_submission_collects_all() {
        let v = values(&[
            ("email", "nope"),
            ("qty", "lots"),
            ("topic", "Wraps"),
            ("when", "13/01/2024"),
        ]);
        let errs = validate_submission(&form(), &v).unwrap_err();
        let keys: Vec<&str> = errs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "email", "qty", "topic", "when"]);
        assert_eq!(errs[0].1, "NAME is required");
    }

    #[test]
    fn test_submission_helpers() {
        let json = serde_json::json!({
            "id": "s1", "form_id": "f1", "created_at": "2024-06-01T10:00:00Z",
            "values": {"name": "Ann", "email": "ann@example.com", "qty": 3}
        });
        let sub: InquirySubmission = serde_json::from_value(json).unwrap();
        assert_eq!(sub.status, SubmissionStatus::New);
        assert_eq!(sub.value_text("qty"), "3");
        assert_eq!(sub.value_text("missing"), "");
        assert_eq!(sub.contact().as_deref(), Some("ann@example.com"));
    }
}
