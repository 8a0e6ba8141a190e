use serde::{Deserialize, Serialize};

use crate::shared::money::round_cents;
use crate::shared::validation::{self, ValidationError, ValidationResult};

/// Stock-keeping record for a consumable (vinyl, ink, substrates, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Unit of measure, e.g. "sheet", "roll", "m²"
    pub unit: String,
    pub quantity_on_hand: f64,
    pub reorder_level: f64,
    pub unit_cost: f64,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity_on_hand <= self.reorder_level
    }

    pub fn stock_value(&self) -> f64 {
        round_cents(self.quantity_on_hand.max(0.0) * self.unit_cost)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InventoryItemDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub quantity_on_hand: f64,
    pub reorder_level: f64,
    pub unit_cost: f64,
    pub supplier: Option<String>,
    pub is_active: bool,
}

impl InventoryItemDto {
    pub fn new() -> Self {
        Self {
            unit: "unit".to_string(),
            is_active: true,
            ..Default::default()
        }
    }

    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            sku: item.sku.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            unit: item.unit.clone(),
            quantity_on_hand: item.quantity_on_hand,
            reorder_level: item.reorder_level,
            unit_cost: item.unit_cost,
            supplier: item.supplier.clone(),
            is_active: item.is_active,
        }
    }

    pub fn validate(&self, existing: &[InventoryItem]) -> ValidationResult {
        validation::require(&self.sku, "SKU")?;
        validation::require(&self.name, "Name")?;
        validation::require(&self.unit, "Unit")?;
        validation::non_negative(self.quantity_on_hand, "Quantity on hand")?;
        validation::non_negative(self.reorder_level, "Reorder level")?;
        validation::non_negative(self.unit_cost, "Unit cost")?;
        let sku = self.sku.trim().to_lowercase();
        let duplicate = existing
            .iter()
            .any(|i| i.sku.trim().to_lowercase() == sku && Some(&i.id) != self.id.as_ref());
        if duplicate {
            return Err(ValidationError::Duplicate("SKU"));
        }
        Ok(())
    }
}

/// Manual stock correction: `POST /api/inventory-items/{id}/adjust`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StockAdjustmentDto {
    pub delta: f64,
    pub reason: String,
}

impl StockAdjustmentDto {
    pub fn validate(&self, item: &InventoryItem) -> ValidationResult {
        if self.delta == 0.0 || self.delta.is_nan() {
            return Err(ValidationError::Rule("Adjustment cannot be zero".to_string()));
        }
        if item.quantity_on_hand + self.delta < 0.0 {
            return Err(ValidationError::Rule(format!(
                "Adjustment would leave {} below zero",
                item.name
            )));
        }
        validation::require(&self.reason, "Reason")
    }
}

/// Inventory list filter, persisted in the query string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InventoryFilter {
    pub search: String,
    pub category: Option<String>,
    pub low_stock: bool,
}

pub fn filter_items(items: &[InventoryItem], filter: &InventoryFilter) -> Vec<InventoryItem> {
    let query = filter.search.trim().to_lowercase();
    items
        .iter()
        .filter(|i| {
            query.is_empty()
                || i.name.to_lowercase().contains(&query)
                || i.sku.to_lowercase().contains(&query)
                || i.supplier.as_deref().unwrap_or("").to_lowercase().contains(&query)
        })
        .filter(|i| {
            filter
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .map_or(true, |c| i.category == c)
        })
        .filter(|i| !filter.low_stock || i.is_low_stock())
        .cloned()
        .collect()
}

/// Sorted distinct non-empty categories
pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut out: Vec<String> = items
        .iter()
        .map(|i| i.category.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

pub fn total_stock_value(items: &[InventoryItem]) -> f64 {
    round_cents(items.iter().map(InventoryItem::stock_value).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, sku: &str, category: &str, qty: f64, reorder: f64, cost: f64) -> InventoryItem {
        InventoryItem {
            id: id.into(),
            sku: sku.into(),
            name: format!("Item {}", id),
            category: category.into(),
            unit: "roll".into(),
            quantity_on_hand: qty,
            reorder_level: reorder,
            unit_cost: cost,
            supplier: Some("Vinyl Co".into()),
            is_active: true,
        }
    }

    #[test]
    fn test_low_stock_and_value() {
        let low = item("1", "V-01", "Vinyl", 2.0, 2.0, 45.5);
        assert!(low.is_low_stock());
        assert_eq!(low.stock_value(), 91.0);
        let ok = item("2", "I-01", "Ink", 10.0, 2.0, 1.25);
        assert!(!ok.is_low_stock());
        assert_eq!(total_stock_value(&[low, ok]), 103.5);
    }

    #[test]
    fn test_filter_and_categories() {
        let items = vec![
            item("1", "V-01", "Vinyl", 1.0, 5.0, 1.0),
            item("2", "V-02", "Vinyl", 9.0, 5.0, 1.0),
            item("3", "I-01", "Ink", 0.0, 1.0, 1.0),
            item("4", "X-01", "", 3.0, 1.0, 1.0),
        ];
        assert_eq!(categories(&items), vec!["Ink".to_string(), "Vinyl".to_string()]);

        let f = InventoryFilter { category: Some("Vinyl".into()), low_stock: true, ..Default::default() };
        let out = filter_items(&items, &f);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");

        let f = InventoryFilter { search: "i-0".into(), ..Default::default() };
        assert_eq!(filter_items(&items, &f).len(), 1);

        let f = InventoryFilter { search: "vinyl co".into(), ..Default::default() };
        assert_eq!(filter_items(&items, &f).len(), 4);
    }

    #[test]
    fn test_duplicate_sku() {
        let items = vec![item("1", "V-01", "Vinyl", 1.0, 5.0, 1.0)];
        let mut dto = InventoryItemDto::new();
        dto.sku = " v-01 ".into();
        dto.name = "Another".into();
        assert_eq!(dto.validate(&items), Err(ValidationError::Duplicate("SKU")));

        let edit = InventoryItemDto::from_item(&items[0]);
        assert!(edit.validate(&items).is_ok());
    }

    #[test]
    fn test_adjustment() {
        let it = item("1", "V-01", "Vinyl", 3.0, 1.0, 1.0);
        let adj = StockAdjustmentDto { delta: -4.0, reason: "Damaged".into() };
        assert!(adj.validate(&it).is_err());
        let adj = StockAdjustmentDto { delta: -3.0, reason: "".into() };
        assert_eq!(adj.validate(&it), Err(ValidationError::Required("Reason")));
        let adj = StockAdjustmentDto { delta: 5.0, reason: "Recount".into() };
        assert!(adj.validate(&it).is_ok());
    }
}
