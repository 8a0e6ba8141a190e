use serde::Serialize;

use super::aggregate::TierPackage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    /// One flag per column
    pub cells: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ComparisonTable {
    pub columns: Vec<TierPackage>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Side-by-side feature matrix for one service's packages.
///
/// Columns are ordered by tier, then sort order. Rows are every feature label
/// in the order it is first seen across those columns; a package that does
/// not list a feature shows it as not included.
pub fn build_comparison(packages: &[TierPackage]) -> ComparisonTable {
    let mut columns = packages.to_vec();
    columns.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.sort_order.cmp(&b.sort_order)));

    let mut labels: Vec<String> = Vec::new();
    for package in &columns {
        for feature in &package.features {
            if !labels.iter().any(|l| l == &feature.label) {
                labels.push(feature.label.clone());
            }
        }
    }

    let rows = labels
        .into_iter()
        .map(|label| {
            let cells = columns
                .iter()
                .map(|p| p.features.iter().any(|f| f.label == label && f.included))
                .collect();
            ComparisonRow { label, cells }
        })
        .collect();

    ComparisonTable { columns, rows }
}

/// Packages of one service, ready for [`build_comparison`].
pub fn packages_for_service(packages: &[TierPackage], service_id: &str) -> Vec<TierPackage> {
    packages
        .iter()
        .filter(|p| p.service_id == service_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_tier_package::aggregate::{Tier, TierFeature};

    fn pkg(id: &str, tier: Tier, order: i32, features: &[(&str, bool)]) -> TierPackage {
        TierPackage {
            id: id.into(),
            service_id: "s1".into(),
            name: id.into(),
            tier,
            price: 10.0,
            description: None,
            features: features
                .iter()
                .map(|(l, i)| TierFeature { label: l.to_string(), included: *i })
                .collect(),
            deliverables: vec![],
            turnaround_days: None,
            is_popular: false,
            sort_order: order,
        }
    }

    #[test]
    fn test_build_comparison() {
        let packages = vec![
            pkg("premium", Tier::Premium, 0, &[("Proof", true), ("Install", true), ("Rush", true)]),
            pkg("basic", Tier::Basic, 0, &[("Proof", true), ("Install", false)]),
            pkg("standard-b", Tier::Standard, 2, &[("Proof", true)]),
            pkg("standard-a", Tier::Standard, 1, &[("Warranty", true)]),
        ];
        let table = build_comparison(&packages);
        let cols: Vec<&str> = table.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(cols, vec!["basic", "standard-a", "standard-b", "premium"]);

        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Proof", "Install", "Warranty", "Rush"]);
        assert_eq!(table.rows[0].cells, vec![true, false, true, true]);
        assert_eq!(table.rows[1].cells, vec![false, false, false, true]);
        assert_eq!(table.rows[3].cells, vec![false, false, false, true]);
    }

    #[test]
    fn test_empty() {
        assert!(build_comparison(&[]).is_empty());
    }
}
