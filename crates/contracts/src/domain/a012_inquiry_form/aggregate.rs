use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::a008_service_catalog::aggregate::slugify;
use crate::shared::validation::{self, ValidationError, ValidationResult};

/// Slug of the form rendered on the public contact page
pub const CONTACT_FORM_SLUG: &str = "contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
    Textarea,
    Select,
    Date,
    Number,
}

impl FieldKind {
    pub fn all() -> [FieldKind; 7] {
        [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Phone,
            FieldKind::Textarea,
            FieldKind::Select,
            FieldKind::Date,
            FieldKind::Number,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone",
            FieldKind::Textarea => "Long text",
            FieldKind::Select => "Dropdown",
            FieldKind::Date => "Date",
            FieldKind::Number => "Number",
        }
    }

    /// `type` attribute of the matching HTML input
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            _ => "text",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormField {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FormField {
    /// Key derived from the label, used when the builder leaves it blank
    pub fn suggested_key(&self) -> String {
        slugify(&self.label).replace('-', "_")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InquiryForm {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub success_message: Option<String>,
}

impl InquiryForm {
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn success_text(&self) -> &str {
        self.success_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("Thanks! We'll be in touch shortly.")
    }

    pub fn move_field(&mut self, index: usize, up: bool) {
        let target = if up { index.checked_sub(1) } else { Some(index + 1) };
        if let Some(target) = target.filter(|t| *t < self.fields.len()) {
            if index < self.fields.len() {
                self.fields.swap(index, target);
            }
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validation::require(&self.name, "Name")?;
        validation::require(&self.slug, "Slug")?;
        if slugify(&self.slug) != self.slug {
            return Err(ValidationError::Rule(
                "Slug may only contain lowercase letters, digits and dashes".to_string(),
            ));
        }
        if self.fields.is_empty() {
            return Err(ValidationError::Empty("Fields"));
        }
        let mut keys = HashSet::new();
        for field in &self.fields {
            validation::require(&field.key, "Field key")?;
            validation::require(&field.label, "Field label")?;
            if !keys.insert(field.key.trim()) {
                return Err(ValidationError::Duplicate("Field key"));
            }
            if field.kind == FieldKind::Select
                && field.options.iter().all(|o| o.trim().is_empty())
            {
                return Err(ValidationError::Rule(format!(
                    "Dropdown \"{}\" needs at least one option",
                    field.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(key: &str, kind: FieldKind) -> FormField {
        FormField {
            key: key.into(),
            label: key.to_uppercase(),
            kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate() {
        let mut form = InquiryForm {
            name: "Contact".into(),
            slug: "contact".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::Empty("Fields")));

        form.fields = vec![field("name", FieldKind::Text), field("topic", FieldKind::Select)];
        assert!(matches!(form.validate(), Err(ValidationError::Rule(_))));

        form.fields[1].options = vec!["Signs".into()];
        assert!(form.validate().is_ok());

        form.fields.push(field("name", FieldKind::Email));
        assert_eq!(form.validate(), Err(ValidationError::Duplicate("Field key")));
    }

    #[test]
    fn test_move_field_and_key() {
        let mut form = InquiryForm::default();
        form.fields = vec![field("a", FieldKind::Text), field("b", FieldKind::Text)];
        form.move_field(1, true);
        assert_eq!(form.fields[0].key, "b");
        form.move_field(1, false);
        assert_eq!(form.fields[1].key, "a");

        let f = FormField { label: "Project Deadline".into(), ..Default::default() };
        assert_eq!(f.suggested_key(), "project_deadline");
    }
}
