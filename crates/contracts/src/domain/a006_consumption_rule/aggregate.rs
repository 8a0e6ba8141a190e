use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, ValidationError, ValidationResult};

/// Inventory consumed per unit of a service sold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRule {
    pub id: String,
    pub service_id: String,
    #[serde(default)]
    pub service_name: String,
    pub inventory_item_id: String,
    #[serde(default)]
    pub inventory_item_name: String,
    pub quantity_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConsumptionRuleDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub service_id: String,
    pub inventory_item_id: String,
    pub quantity_per_unit: f64,
}

impl ConsumptionRuleDto {
    pub fn from_rule(rule: &ConsumptionRule) -> Self {
        Self {
            id: Some(rule.id.clone()),
            service_id: rule.service_id.clone(),
            inventory_item_id: rule.inventory_item_id.clone(),
            quantity_per_unit: rule.quantity_per_unit,
        }
    }

    pub fn validate(&self, existing: &[ConsumptionRule]) -> ValidationResult {
        validation::require(&self.service_id, "Service")?;
        validation::require(&self.inventory_item_id, "Inventory item")?;
        if self.quantity_per_unit <= 0.0 || self.quantity_per_unit.is_nan() {
            return Err(ValidationError::Rule(
                "Quantity per unit must be greater than zero".to_string(),
            ));
        }
        let duplicate = existing.iter().any(|r| {
            r.service_id == self.service_id
                && r.inventory_item_id == self.inventory_item_id
                && Some(&r.id) != self.id.as_ref()
        });
        if duplicate {
            return Err(ValidationError::Rule(
                "This service already has a rule for that inventory item".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rules of one service, for the grouped view
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConsumption {
    pub service_id: String,
    pub service_name: String,
    pub rules: Vec<ConsumptionRule>,
}

/// Group by service, services ordered by name, rules by item name
pub fn group_by_service(rules: &[ConsumptionRule]) -> Vec<ServiceConsumption> {
    let mut groups: Vec<ServiceConsumption> = Vec::new();
    for rule in rules {
        match groups.iter_mut().find(|g| g.service_id == rule.service_id) {
            Some(group) => group.rules.push(rule.clone()),
            None => groups.push(ServiceConsumption {
                service_id: rule.service_id.clone(),
                service_name: rule.service_name.clone(),
                rules: vec![rule.clone()],
            }),
        }
    }
    for group in &mut groups {
        group
            .rules
            .sort_by_key(|r| r.inventory_item_name.to_lowercase());
    }
    groups.sort_by_key(|g| g.service_name.to_lowercase());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str, sid: &str, sname: &str, iid: &str, iname: &str) -> ConsumptionRule {
        ConsumptionRule {
            id: id.into(),
            service_id: sid.into(),
            service_name: sname.into(),
            inventory_item_id: iid.into(),
            inventory_item_name: iname.into(),
            quantity_per_unit: 1.5,
        }
    }

    #[test]
    fn test_group_by_service() {
        let rules = vec![
            rule("1", "s2", "Yard signs", "i1", "Coroplast"),
            rule("2", "s1", "Banners", "i3", "Vinyl 13oz"),
            rule("3", "s2", "Yard signs", "i2", "Alu stakes"),
        ];
        let groups = group_by_service(&rules);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].service_name, "Banners");
        let items: Vec<&str> = groups[1].rules.iter().map(|r| r.inventory_item_name.as_str()).collect();
        assert_eq!(items, vec!["Alu stakes", "Coroplast"]);
    }

    #[test]
    fn test_validation() {
        let existing = vec![rule("1", "s1", "Banners", "i1", "Vinyl")];
        let mut dto = ConsumptionRuleDto {
            id: None,
            service_id: "s1".into(),
            inventory_item_id: "i1".into(),
            quantity_per_unit: 2.0,
        };
        assert!(dto.validate(&existing).is_err());
        dto.id = Some("1".into());
        assert!(dto.validate(&existing).is_ok());
        dto.quantity_per_unit = 0.0;
        assert!(dto.validate(&existing).is_err());
        dto.service_id.clear();
        assert_eq!(dto.validate(&existing), Err(ValidationError::Required("Service")));
    }
}
