use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shared::validation::{self, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Basic,
    Standard,
    Premium,
    Gold,
}

impl Tier {
    pub fn all() -> [Tier; 4] {
        [Tier::Basic, Tier::Standard, Tier::Premium, Tier::Gold]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
            Tier::Gold => "gold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::Standard => "Standard",
            Tier::Premium => "Premium",
            Tier::Gold => "Gold",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

/// Admin list filter; empty `service_id` shows every service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TierPackageFilter {
    pub service_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TierFeature {
    pub label: String,
    #[serde(default)]
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPackage {
    pub id: String,
    pub service_id: String,
    pub name: String,
    pub tier: Tier,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<TierFeature>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub turnaround_days: Option<u32>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TierPackageDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub service_id: String,
    pub name: String,
    pub tier: Tier,
    pub price: f64,
    pub description: Option<String>,
    pub features: Vec<TierFeature>,
    pub deliverables: Vec<String>,
    pub turnaround_days: Option<u32>,
    pub is_popular: bool,
    pub sort_order: i32,
}

impl TierPackageDto {
    pub fn new_for_service(service_id: &str) -> Self {
        Self {
            service_id: service_id.to_string(),
            ..Default::default()
        }
    }

    pub fn from_package(p: &TierPackage) -> Self {
        Self {
            id: Some(p.id.clone()),
            service_id: p.service_id.clone(),
            name: p.name.clone(),
            tier: p.tier,
            price: p.price,
            description: p.description.clone(),
            features: p.features.clone(),
            deliverables: p.deliverables.clone(),
            turnaround_days: p.turnaround_days,
            is_popular: p.is_popular,
            sort_order: p.sort_order,
        }
    }

    /// Drops blank feature and deliverable rows left over from the editor.
    pub fn normalized(mut self) -> Self {
        self.features.retain(|f| !f.label.trim().is_empty());
        for f in &mut self.features {
            f.label = f.label.trim().to_string();
        }
        self.deliverables = self
            .deliverables
            .into_iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        self
    }

    pub fn validate(&self) -> ValidationResult {
        validation::require(&self.service_id, "Service")?;
        validation::require(&self.name, "Name")?;
        validation::non_negative(self.price, "Price")?;
        let mut seen = HashSet::new();
        for feature in &self.features {
            let label = feature.label.trim().to_lowercase();
            if label.is_empty() {
                return Err(ValidationError::Required("Feature label"));
            }
            if !seen.insert(label) {
                return Err(ValidationError::Duplicate("Feature label"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order() {
        assert!(Tier::Basic < Tier::Standard);
        assert!(Tier::Premium < Tier::Gold);
        assert_eq!(Tier::from_code("gold"), Some(Tier::Gold));
        assert_eq!(Tier::from_code("platinum"), None);
    }

    #[test]
    fn test_validate_and_normalize() {
        let mut dto = TierPackageDto::new_for_service("s1");
        assert_eq!(dto.validate(), Err(ValidationError::Required("Name")));
        dto.name = "Starter".into();
        dto.features = vec![
            TierFeature { label: "Design proof".into(), included: true },
            TierFeature { label: "  ".into(), included: false },
        ];
        dto.deliverables = vec!["PDF".into(), "".into()];
        assert_eq!(dto.validate(), Err(ValidationError::Required("Feature label")));

        let dto = dto.normalized();
        assert_eq!(dto.features.len(), 1);
        assert_eq!(dto.deliverables, vec!["PDF".to_string()]);
        assert!(dto.validate().is_ok());

        let mut dup = dto.clone();
        dup.features.push(TierFeature { label: "design PROOF".into(), included: false });
        assert_eq!(dup.validate(), Err(ValidationError::Duplicate("Feature label")));
    }
}
