use serde::{Deserialize, Serialize};

use super::aggregate::{PurchaseOrder, PurchaseOrderLine};
use crate::shared::money::round_cents;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PurchaseOrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
}

pub fn line_total(quantity: f64, unit_cost: f64) -> f64 {
    round_cents(quantity * unit_cost)
}

/// subtotal = Σ qty × cost; tax = subtotal × rate / 100; total = subtotal + tax + shipping.
/// The subtotal is rounded to cents once, over the raw sum; the other figures are rounded too.
pub fn compute_totals(lines: &[PurchaseOrderLine], tax_rate_percent: f64, shipping: f64) -> PurchaseOrderTotals {
    let subtotal = round_cents(lines.iter().map(|l| l.quantity * l.unit_cost).sum());
    let tax = round_cents(subtotal * tax_rate_percent / 100.0);
    let shipping = round_cents(shipping);
    PurchaseOrderTotals {
        subtotal,
        tax,
        shipping,
        total: round_cents(subtotal + tax + shipping),
    }
}

/// Sum of totals across several orders (list footer)
pub fn sum_totals(orders: &[PurchaseOrder]) -> PurchaseOrderTotals {
    orders.iter().map(PurchaseOrder::totals).fold(
        PurchaseOrderTotals::default(),
        |acc, t| PurchaseOrderTotals {
            subtotal: round_cents(acc.subtotal + t.subtotal),
            tax: round_cents(acc.tax + t.tax),
            shipping: round_cents(acc.shipping + t.shipping),
            total: round_cents(acc.total + t.total),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(qty: f64, cost: f64) -> PurchaseOrderLine {
        PurchaseOrderLine {
            inventory_item_id: "i".into(),
            quantity: qty,
            unit_cost: cost,
            ..Default::default()
        }
    }

    #[test]
    fn test_compute_totals() {
        let lines = vec![line(3.0, 19.99), line(2.0, 5.005)];
        let t = compute_totals(&lines, 8.25, 12.5);
        assert_eq!(t.subtotal, 69.98);
        assert_eq!(t.tax, 5.77);
        assert_eq!(t.shipping, 12.5);
        assert_eq!(t.total, 88.25);
    }

    #[test]
    fn test_subtotal_rounds_raw_sum() {
        let lines = vec![line(1.0, 0.004), line(1.0, 0.004), line(1.0, 0.004)];
        assert_eq!(lines[0].line_total(), 0.0);
        let t = compute_totals(&lines, 0.0, 0.0);
        assert_eq!(t.subtotal, 0.01);
        assert_eq!(t.total, 0.01);
    }

    #[test]
    fn test_empty_order() {
        let t = compute_totals(&[], 10.0, 0.0);
        assert_eq!(t, PurchaseOrderTotals::default());
    }
}
