use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::totals::{compute_totals, PurchaseOrderTotals};
use crate::shared::validation::{self, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Submitted,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    pub fn all() -> [PurchaseOrderStatus; 4] {
        [
            PurchaseOrderStatus::Draft,
            PurchaseOrderStatus::Submitted,
            PurchaseOrderStatus::Received,
            PurchaseOrderStatus::Cancelled,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "draft",
            PurchaseOrderStatus::Submitted => "submitted",
            PurchaseOrderStatus::Received => "received",
            PurchaseOrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "Draft",
            PurchaseOrderStatus::Submitted => "Submitted",
            PurchaseOrderStatus::Received => "Received",
            PurchaseOrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "neutral",
            PurchaseOrderStatus::Submitted => "primary",
            PurchaseOrderStatus::Received => "success",
            PurchaseOrderStatus::Cancelled => "error",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PurchaseOrderLine {
    pub inventory_item_id: String,
    #[serde(default)]
    pub description: String,
    pub quantity: f64,
    pub unit_cost: f64,
    #[serde(default)]
    pub received_quantity: f64,
}

impl PurchaseOrderLine {
    pub fn line_total(&self) -> f64 {
        super::totals::line_total(self.quantity, self.unit_cost)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub po_number: String,
    pub supplier: String,
    pub status: PurchaseOrderStatus,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub expected_date: Option<NaiveDate>,
    #[serde(default)]
    pub lines: Vec<PurchaseOrderLine>,
    #[serde(default)]
    pub tax_rate_percent: f64,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PurchaseOrder {
    pub fn totals(&self) -> PurchaseOrderTotals {
        compute_totals(&self.lines, self.tax_rate_percent, self.shipping_cost)
    }

    pub fn can_edit(&self) -> bool {
        self.status == PurchaseOrderStatus::Draft
    }

    pub fn can_submit(&self) -> bool {
        self.status == PurchaseOrderStatus::Draft && !self.lines.is_empty()
    }

    pub fn can_receive(&self) -> bool {
        self.status == PurchaseOrderStatus::Submitted
    }

    pub fn can_cancel(&self) -> bool {
        matches!(
            self.status,
            PurchaseOrderStatus::Draft | PurchaseOrderStatus::Submitted
        )
    }

    pub fn can_delete(&self) -> bool {
        self.status == PurchaseOrderStatus::Draft
    }

    /// Past expected date and still open
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == PurchaseOrderStatus::Submitted
            && self.expected_date.map_or(false, |d| d < today)
    }
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub supplier: String,
    pub status: PurchaseOrderStatus,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,
    pub lines: Vec<PurchaseOrderLine>,
    pub tax_rate_percent: f64,
    pub shipping_cost: f64,
    pub notes: Option<String>,
}

impl PurchaseOrderDto {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            id: None,
            supplier: String::new(),
            status: PurchaseOrderStatus::Draft,
            order_date: today,
            expected_date: None,
            lines: Vec::new(),
            tax_rate_percent: 0.0,
            shipping_cost: 0.0,
            notes: None,
        }
    }

    pub fn from_order(po: &PurchaseOrder) -> Self {
        Self {
            id: Some(po.id.clone()),
            supplier: po.supplier.clone(),
            status: po.status,
            order_date: po.order_date,
            expected_date: po.expected_date,
            lines: po.lines.clone(),
            tax_rate_percent: po.tax_rate_percent,
            shipping_cost: po.shipping_cost,
            notes: po.notes.clone(),
        }
    }

    pub fn totals(&self) -> PurchaseOrderTotals {
        compute_totals(&self.lines, self.tax_rate_percent, self.shipping_cost)
    }

    pub fn validate(&self) -> ValidationResult {
        validation::require(&self.supplier, "Supplier")?;
        if self.status == PurchaseOrderStatus::Submitted && self.lines.is_empty() {
            return Err(ValidationError::Empty("Order lines"));
        }
        for (idx, line) in self.lines.iter().enumerate() {
            if line.inventory_item_id.trim().is_empty() {
                return Err(ValidationError::Rule(format!("Line {}: choose an item", idx + 1)));
            }
            if line.quantity <= 0.0 || line.quantity.is_nan() {
                return Err(ValidationError::Rule(format!(
                    "Line {}: quantity must be greater than zero",
                    idx + 1
                )));
            }
            validation::non_negative(line.unit_cost, "Unit cost")?;
        }
        validation::in_range(self.tax_rate_percent, 0, 100, "Tax rate")?;
        validation::non_negative(self.shipping_cost, "Shipping")?;
        if let Some(expected) = self.expected_date {
            if expected < self.order_date {
                return Err(ValidationError::DateRange);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiveLineDto {
    pub inventory_item_id: String,
    pub received_quantity: f64,
}

/// `POST /api/purchase-orders/{id}/receive`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReceivePurchaseOrderDto {
    pub lines: Vec<ReceiveLineDto>,
}

impl ReceivePurchaseOrderDto {
    /// Pre-fill with the full ordered quantity of every line
    pub fn full(po: &PurchaseOrder) -> Self {
        Self {
            lines: po
                .lines
                .iter()
                .map(|l| ReceiveLineDto {
                    inventory_item_id: l.inventory_item_id.clone(),
                    received_quantity: l.quantity,
                })
                .collect(),
        }
    }

    pub fn validate(&self, po: &PurchaseOrder) -> ValidationResult {
        if self.lines.iter().all(|l| l.received_quantity <= 0.0) {
            return Err(ValidationError::Rule("Nothing to receive".to_string()));
        }
        // Receive lines follow the order lines by position; an item may appear twice.
        if self.lines.len() != po.lines.len() {
            return Err(ValidationError::Rule("Receipt does not match the order lines".to_string()));
        }
        for (line, ordered) in self.lines.iter().zip(&po.lines) {
            if line.inventory_item_id != ordered.inventory_item_id {
                return Err(ValidationError::Rule("Unknown order line".to_string()));
            }
            if line.received_quantity < 0.0 || line.received_quantity > ordered.quantity {
                return Err(ValidationError::Rule(format!(
                    "Received quantity for {} must be between 0 and {}",
                    if ordered.description.is_empty() { &ordered.inventory_item_id } else { &ordered.description },
                    ordered.quantity
                )));
            }
        }
        Ok(())
    }
}

/// Purchase order list filter, persisted in the query string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PurchaseOrderFilter {
    pub status: Option<PurchaseOrderStatus>,
    pub search: String,
}

pub fn filter_orders(orders: &[PurchaseOrder], filter: &PurchaseOrderFilter) -> Vec<PurchaseOrder> {
    let query = filter.search.trim().to_lowercase();
    let mut out: Vec<PurchaseOrder> = orders
        .iter()
        .filter(|o| filter.status.map_or(true, |s| o.status == s))
        .filter(|o| {
            query.is_empty()
                || o.po_number.to_lowercase().contains(&query)
                || o.supplier.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| b.order_date.cmp(&a.order_date).then_with(|| b.po_number.cmp(&a.po_number)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn line(item: &str, qty: f64, cost: f64) -> PurchaseOrderLine {
        PurchaseOrderLine {
            inventory_item_id: item.into(),
            description: format!("Item {}", item),
            quantity: qty,
            unit_cost: cost,
            received_quantity: 0.0,
        }
    }

    fn order(no: &str, status: PurchaseOrderStatus, date: &str) -> PurchaseOrder {
        PurchaseOrder {
            id: no.to_lowercase(),
            po_number: no.into(),
            supplier: "Sign Supply".into(),
            status,
            order_date: d(date),
            expected_date: Some(d("2024-06-20")),
            lines: vec![line("i1", 10.0, 2.5)],
            tax_rate_percent: 8.0,
            shipping_cost: 15.0,
            notes: None,
        }
    }

    #[test]
    fn test_status_transitions() {
        let draft = order("PO-1", PurchaseOrderStatus::Draft, "2024-06-01");
        assert!(draft.can_edit() && draft.can_submit() && draft.can_cancel() && draft.can_delete());
        assert!(!draft.can_receive());

        let mut empty = draft.clone();
        empty.lines.clear();
        assert!(!empty.can_submit());

        let submitted = order("PO-2", PurchaseOrderStatus::Submitted, "2024-06-01");
        assert!(submitted.can_receive() && submitted.can_cancel());
        assert!(!submitted.can_edit());
        assert!(submitted.is_overdue(d("2024-06-21")));
        assert!(!submitted.is_overdue(d("2024-06-20")));

        let received = order("PO-3", PurchaseOrderStatus::Received, "2024-06-01");
        assert!(!received.can_cancel() && !received.can_receive());
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = PurchaseOrderDto::new(d("2024-06-01"));
        assert_eq!(dto.validate(), Err(ValidationError::Required("Supplier")));
        dto.supplier = "Sign Supply".into();
        assert!(dto.validate().is_ok());

        dto.status = PurchaseOrderStatus::Submitted;
        assert_eq!(dto.validate(), Err(ValidationError::Empty("Order lines")));

        dto.lines.push(line("", 1.0, 1.0));
        assert!(matches!(dto.validate(), Err(ValidationError::Rule(_))));
        dto.lines[0].inventory_item_id = "i1".into();
        dto.lines[0].quantity = 0.0;
        assert!(matches!(dto.validate(), Err(ValidationError::Rule(_))));
        dto.lines[0].quantity = 3.0;
        assert!(dto.validate().is_ok());

        dto.expected_date = Some(d("2024-05-01"));
        assert_eq!(dto.validate(), Err(ValidationError::DateRange));
    }

    #[test]
    fn test_receive_validation() {
        let po = order("PO-2", PurchaseOrderStatus::Submitted, "2024-06-01");
        let mut recv = ReceivePurchaseOrderDto::full(&po);
        assert!(recv.validate(&po).is_ok());
        recv.lines[0].received_quantity = 11.0;
        assert!(recv.validate(&po).is_err());
        recv.lines[0].received_quantity = 0.0;
        assert!(recv.validate(&po).is_err());
    }

    #[test]
    fn test_receive_repeated_item_lines() {
        let mut po = order("PO-4", PurchaseOrderStatus::Submitted, "2024-06-01");
        po.lines = vec![line("vinyl", 2.0, 3.0), line("vinyl", 10.0, 3.0)];

        let mut recv = ReceivePurchaseOrderDto::full(&po);
        assert!(recv.validate(&po).is_ok());

        recv.lines[1].received_quantity = 11.0;
        assert!(recv.validate(&po).is_err());
        recv.lines[1].received_quantity = 10.0;
        recv.lines[0].received_quantity = 3.0;
        assert!(recv.validate(&po).is_err());

        recv.lines[0].received_quantity = 2.0;
        recv.lines[1].inventory_item_id = "ink".into();
        assert_eq!(
            recv.validate(&po),
            Err(ValidationError::Rule("Unknown order line".to_string()))
        );

        recv.lines[1].inventory_item_id = "vinyl".into();
        recv.lines.pop();
        assert_eq!(
            recv.validate(&po),
            Err(ValidationError::Rule("Receipt does not match the order lines".to_string()))
        );
    }

    #[test]
    fn test_filter_orders() {
        let orders = vec![
            order("PO-1", PurchaseOrderStatus::Draft, "2024-05-01"),
            order("PO-2", PurchaseOrderStatus::Submitted, "2024-06-01"),
            order("PO-3", PurchaseOrderStatus::Submitted, "2024-04-01"),
        ];
        let all = filter_orders(&orders, &PurchaseOrderFilter::default());
        let nos: Vec<&str> = all.iter().map(|o| o.po_number.as_str()).collect();
        assert_eq!(nos, vec!["PO-2", "PO-1", "PO-3"]);

        let submitted = PurchaseOrderFilter {
            status: Some(PurchaseOrderStatus::Submitted),
            search: "po-3".into(),
        };
        assert_eq!(filter_orders(&orders, &submitted).len(), 1);
    }
}
