use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shared::validation::{self, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub price_delta: f64,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: f64,
    /// "each", "sq ft", "hour"...
    #[serde(default)]
    pub price_unit: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub options: Vec<ServiceOption>,
}

fn default_true() -> bool {
    true
}

impl Service {
    /// "From $12.00 / sq ft"
    pub fn price_label(&self) -> String {
        let (min, max) = price_range(self);
        let base = if (max - min).abs() < f64::EPSILON {
            crate::shared::money::format_currency(min)
        } else {
            format!("From {}", crate::shared::money::format_currency(min))
        };
        match self.price_unit.as_deref().filter(|u| !u.is_empty()) {
            Some(unit) => format!("{} / {}", base, unit),
            None => base,
        }
    }
}

/// Lowest and highest price reachable by choosing at most one option.
pub fn price_range(service: &Service) -> (f64, f64) {
    let base = service.base_price;
    let deltas = service.options.iter().map(|o| o.price_delta);
    let min_delta = deltas.clone().fold(0.0_f64, f64::min);
    let max_delta = deltas.fold(0.0_f64, f64::max);
    (
        crate::shared::money::round_cents((base + min_delta).max(0.0)),
        crate::shared::money::round_cents(base + max_delta),
    )
}

/// Lowercase, ASCII alphanumerics separated by single dashes.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceCategoryDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sort_order: i32,
}

impl ServiceCategoryDto {
    pub fn from_category(c: &ServiceCategory) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            slug: c.slug.clone(),
            description: c.description.clone(),
            sort_order: c.sort_order,
        }
    }

    pub fn validate(&self, existing: &[ServiceCategory]) -> ValidationResult {
        validation::require(&self.name, "Name")?;
        validation::require(&self.slug, "Slug")?;
        if slugify(&self.slug) != self.slug {
            return Err(ValidationError::Rule(
                "Slug may only contain lowercase letters, digits and dashes".to_string(),
            ));
        }
        let taken = existing
            .iter()
            .filter(|c| Some(&c.id) != self.id.as_ref())
            .any(|c| c.slug == self.slug);
        if taken {
            return Err(ValidationError::Duplicate("Slug"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub category_id: Option<String>,
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub base_price: f64,
    pub price_unit: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub options: Vec<ServiceOption>,
}

impl Default for ServiceDto {
    fn default() -> Self {
        Self {
            id: None,
            category_id: None,
            name: String::new(),
            slug: String::new(),
            short_description: None,
            description: None,
            base_price: 0.0,
            price_unit: None,
            is_active: true,
            is_featured: false,
            sort_order: 0,
            options: Vec::new(),
        }
    }
}

impl ServiceDto {
    pub fn new_in_category(category_id: Option<String>) -> Self {
        Self {
            category_id,
            ..Default::default()
        }
    }

    pub fn from_service(s: &Service) -> Self {
        Self {
            id: Some(s.id.clone()),
            category_id: s.category_id.clone(),
            name: s.name.clone(),
            slug: s.slug.clone(),
            short_description: s.short_description.clone(),
            description: s.description.clone(),
            base_price: s.base_price,
            price_unit: s.price_unit.clone(),
            is_active: s.is_active,
            is_featured: s.is_featured,
            sort_order: s.sort_order,
            options: s.options.clone(),
        }
    }

    /// Slug falls back to the slugified name when left blank.
    pub fn effective_slug(&self) -> String {
        if self.slug.trim().is_empty() {
            slugify(&self.name)
        } else {
            self.slug.trim().to_string()
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validation::require(&self.name, "Name")?;
        if self.category_id.as_deref().map_or(true, |c| c.trim().is_empty()) {
            return Err(ValidationError::Required("Category"));
        }
        validation::non_negative(self.base_price, "Base price")?;
        let mut seen = HashSet::new();
        for option in &self.options {
            let name = option.name.trim().to_lowercase();
            if name.is_empty() {
                return Err(ValidationError::Required("Option name"));
            }
            if !seen.insert(name) {
                return Err(ValidationError::Duplicate("Option name"));
            }
        }
        if self.options.iter().filter(|o| o.is_default).count() > 1 {
            return Err(ValidationError::Rule(
                "Only one option can be the default".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base: f64, deltas: &[f64]) -> Service {
        Service {
            id: "s1".into(),
            category_id: Some("c1".into()),
            name: "Vinyl Banner".into(),
            slug: "vinyl-banner".into(),
            short_description: None,
            description: None,
            base_price: base,
            price_unit: Some("sq ft".into()),
            is_active: true,
            is_featured: false,
            sort_order: 0,
            options: deltas
                .iter()
                .enumerate()
                .map(|(i, d)| ServiceOption {
                    id: None,
                    name: format!("Opt {}", i),
                    price_delta: *d,
                    is_default: false,
                })
                .collect(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Vinyl Banners & Signs"), "vinyl-banners-signs");
        assert_eq!(slugify("  --Large  Format-- "), "large-format");
        assert_eq!(slugify("A1"), "a1");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_price_range() {
        assert_eq!(price_range(&service(10.0, &[])), (10.0, 10.0));
        assert_eq!(price_range(&service(10.0, &[5.0, -2.5])), (7.5, 15.0));
        assert_eq!(price_range(&service(2.0, &[-5.0])), (0.0, 2.0));
    }

    #[test]
    fn test_price_label() {
        assert_eq!(service(12.0, &[]).price_label(), "$12.00 / sq ft");
        assert_eq!(service(12.0, &[3.0]).price_label(), "From $12.00 / sq ft");
    }

    #[test]
    fn test_service_validation() {
        let mut dto = ServiceDto::from_service(&service(10.0, &[1.0, 2.0]));
        assert!(dto.validate().is_ok());
        dto.options[1].name = "opt 0".into();
        assert_eq!(dto.validate(), Err(ValidationError::Duplicate("Option name")));
        dto.options.clear();
        dto.base_price = -1.0;
        assert_eq!(dto.validate(), Err(ValidationError::Negative("Base price")));
        dto.base_price = 1.0;
        dto.category_id = None;
        assert_eq!(dto.validate(), Err(ValidationError::Required("Category")));
    }

    #[test]
    fn test_category_slug_unique() {
        let existing = vec![ServiceCategory {
            id: "c1".into(),
            name: "Banners".into(),
            slug: "banners".into(),
            description: None,
            sort_order: 0,
        }];
        let mut dto = ServiceCategoryDto {
            name: "Banners 2".into(),
            slug: "banners".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate(&existing), Err(ValidationError::Duplicate("Slug")));
        dto.id = Some("c1".into());
        assert!(dto.validate(&existing).is_ok());
        dto.slug = "Bad Slug".into();
        assert!(matches!(dto.validate(&existing), Err(ValidationError::Rule(_))));
    }
}
