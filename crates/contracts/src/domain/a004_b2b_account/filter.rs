use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{B2bAccount, ContractStatus};

/// Accounts list filter, persisted in the query string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct B2bFilter {
    pub search: String,
    pub status: Option<ContractStatus>,
}

impl B2bFilter {
    pub fn active_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty()) + usize::from(self.status.is_some())
    }
}

pub fn filter_accounts(accounts: &[B2bAccount], filter: &B2bFilter, today: NaiveDate) -> Vec<B2bAccount> {
    let query = filter.search.trim().to_lowercase();
    let mut out: Vec<B2bAccount> = accounts
        .iter()
        .filter(|a| {
            query.is_empty()
                || a.company_name.to_lowercase().contains(&query)
                || a.contact_name.to_lowercase().contains(&query)
                || a.contact_email.to_lowercase().contains(&query)
        })
        .filter(|a| filter.status.map_or(true, |s| a.contract_status(today) == s))
        .cloned()
        .collect();
    out.sort_by_key(|a| a.company_name.to_lowercase());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_b2b_account::aggregate::PaymentTerms;

    fn account(name: &str, end: Option<&str>, active: bool) -> B2bAccount {
        B2bAccount {
            id: name.to_lowercase(),
            company_name: name.into(),
            contact_name: "Contact".into(),
            contact_email: format!("{}@corp.test", name.to_lowercase()),
            contact_phone: None,
            billing_email: None,
            billing_address: None,
            payment_terms: PaymentTerms::Net30,
            discount_percent: 0.0,
            contract_start: None,
            contract_end: end.map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()),
            is_active: active,
            notes: None,
        }
    }

    #[test]
    fn test_filter_accounts() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let accounts = vec![
            account("Zeta Foods", Some("2024-06-20"), true),
            account("alpha Labs", None, true),
            account("Mid Corp", None, false),
        ];

        let all = filter_accounts(&accounts, &B2bFilter::default(), today);
        let names: Vec<&str> = all.iter().map(|a| a.company_name.as_str()).collect();
        assert_eq!(names, vec!["alpha Labs", "Mid Corp", "Zeta Foods"]);

        let expiring = B2bFilter { status: Some(ContractStatus::Expiring), ..Default::default() };
        assert_eq!(filter_accounts(&accounts, &expiring, today).len(), 1);

        let search = B2bFilter { search: "corp.test".into(), status: Some(ContractStatus::Inactive) };
        assert_eq!(filter_accounts(&accounts, &search, today)[0].company_name, "Mid Corp");
        assert_eq!(search.active_count(), 2);
    }
}
