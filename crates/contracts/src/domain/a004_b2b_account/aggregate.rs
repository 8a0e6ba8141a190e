use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, ValidationError, ValidationResult};

/// Contracts ending within this many days are flagged as expiring
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTerms {
    Prepaid,
    Net15,
    #[default]
    Net30,
    Net45,
    Net60,
}

impl PaymentTerms {
    pub fn all() -> [PaymentTerms; 5] {
        [
            PaymentTerms::Prepaid,
            PaymentTerms::Net15,
            PaymentTerms::Net30,
            PaymentTerms::Net45,
            PaymentTerms::Net60,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentTerms::Prepaid => "prepaid",
            PaymentTerms::Net15 => "net15",
            PaymentTerms::Net30 => "net30",
            PaymentTerms::Net45 => "net45",
            PaymentTerms::Net60 => "net60",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentTerms::Prepaid => "Prepaid",
            PaymentTerms::Net15 => "Net 15",
            PaymentTerms::Net30 => "Net 30",
            PaymentTerms::Net45 => "Net 45",
            PaymentTerms::Net60 => "Net 60",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

/// Enterprise customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct B2bAccount {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub billing_email: Option<String>,
    #[serde(default)]
    pub billing_address: Option<String>,
    #[serde(default)]
    pub payment_terms: PaymentTerms,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub contract_start: Option<NaiveDate>,
    #[serde(default)]
    pub contract_end: Option<NaiveDate>,
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Pending,
    Active,
    Expiring,
    Expired,
    Inactive,
}

impl ContractStatus {
    pub fn all() -> [ContractStatus; 5] {
        [
            ContractStatus::Active,
            ContractStatus::Expiring,
            ContractStatus::Pending,
            ContractStatus::Expired,
            ContractStatus::Inactive,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "pending",
            ContractStatus::Active => "active",
            ContractStatus::Expiring => "expiring",
            ContractStatus::Expired => "expired",
            ContractStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "Pending",
            ContractStatus::Active => "Active",
            ContractStatus::Expiring => "Expiring soon",
            ContractStatus::Expired => "Expired",
            ContractStatus::Inactive => "Inactive",
        }
    }

    /// Badge modifier used by the list views
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ContractStatus::Active => "success",
            ContractStatus::Expiring => "warning",
            ContractStatus::Pending => "primary",
            ContractStatus::Expired => "error",
            ContractStatus::Inactive => "neutral",
        }
    }
}

impl B2bAccount {
    pub fn contract_status(&self, today: NaiveDate) -> ContractStatus {
        if !self.is_active {
            return ContractStatus::Inactive;
        }
        if let Some(start) = self.contract_start {
            if start > today {
                return ContractStatus::Pending;
            }
        }
        match self.contract_end {
            Some(end) if end < today => ContractStatus::Expired,
            Some(end) if (end - today).num_days() <= EXPIRING_WINDOW_DAYS => ContractStatus::Expiring,
            _ => ContractStatus::Active,
        }
    }
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct B2bAccountDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub billing_email: Option<String>,
    pub billing_address: Option<String>,
    pub payment_terms: PaymentTerms,
    pub discount_percent: f64,
    pub contract_start: Option<NaiveDate>,
    pub contract_end: Option<NaiveDate>,
    pub is_active: bool,
    pub notes: Option<String>,
}

impl B2bAccountDto {
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Default::default()
        }
    }

    pub fn from_account(a: &B2bAccount) -> Self {
        Self {
            id: Some(a.id.clone()),
            company_name: a.company_name.clone(),
            contact_name: a.contact_name.clone(),
            contact_email: a.contact_email.clone(),
            contact_phone: a.contact_phone.clone(),
            billing_email: a.billing_email.clone(),
            billing_address: a.billing_address.clone(),
            payment_terms: a.payment_terms,
            discount_percent: a.discount_percent,
            contract_start: a.contract_start,
            contract_end: a.contract_end,
            is_active: a.is_active,
            notes: a.notes.clone(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validation::require(&self.company_name, "Company name")?;
        validation::require(&self.contact_name, "Contact name")?;
        validation::require_email(&self.contact_email, "Contact email")?;
        validation::optional_email(self.billing_email.as_deref(), "Billing email")?;
        validation::in_range(self.discount_percent, 0, 100, "Discount")?;
        if let (Some(start), Some(end)) = (self.contract_start, self.contract_end) {
            if end <= start {
                return Err(ValidationError::DateRange);
            }
        }
        Ok(())
    }
}

/// Delivery/installation site belonging to an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct B2bLocation {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct B2bLocationDto {
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
}

impl B2bLocationDto {
    pub fn validate(&self) -> ValidationResult {
        validation::require(&self.name, "Location name")?;
        validation::require(&self.address, "Address")
    }
}

/// Negotiated price of one service for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPrice {
    #[serde(default)]
    pub id: Option<String>,
    pub service_id: String,
    #[serde(default)]
    pub service_name: String,
    pub contract_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Replace-all payload for `PUT /api/b2b-accounts/{id}/contract-pricing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContractPricingDto {
    pub prices: Vec<ContractPrice>,
}

impl ContractPricingDto {
    pub fn validate(&self) -> ValidationResult {
        let mut seen = std::collections::HashSet::new();
        for price in &self.prices {
            validation::require(&price.service_id, "Service")?;
            validation::non_negative(price.contract_price, "Contract price")?;
            if !seen.insert(price.service_id.as_str()) {
                return Err(ValidationError::Duplicate("Service"));
            }
        }
        Ok(())
    }
}

/// Saving relative to the list price, in percent (0 when list price is unknown)
pub fn savings_percent(list_price: f64, contract_price: f64) -> f64 {
    if list_price <= 0.0 {
        return 0.0;
    }
    crate::shared::money::round_cents((list_price - contract_price) / list_price * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn account(start: Option<&str>, end: Option<&str>, active: bool) -> B2bAccount {
        B2bAccount {
            id: "acc".into(),
            company_name: "Acme".into(),
            contact_name: "Jo".into(),
            contact_email: "jo@acme.test".into(),
            contact_phone: None,
            billing_email: None,
            billing_address: None,
            payment_terms: PaymentTerms::Net30,
            discount_percent: 10.0,
            contract_start: start.map(d),
            contract_end: end.map(d),
            is_active: active,
            notes: None,
        }
    }

    #[test]
    fn test_contract_status() {
        let today = d("2024-06-15");
        assert_eq!(account(None, None, true).contract_status(today), ContractStatus::Active);
        assert_eq!(account(None, None, false).contract_status(today), ContractStatus::Inactive);
        assert_eq!(
            account(Some("2024-07-01"), None, true).contract_status(today),
            ContractStatus::Pending
        );
        assert_eq!(
            account(Some("2024-01-01"), Some("2024-06-14"), true).contract_status(today),
            ContractStatus::Expired
        );
        assert_eq!(
            account(Some("2024-01-01"), Some("2024-07-15"), true).contract_status(today),
            ContractStatus::Expiring
        );
        assert_eq!(
            account(Some("2024-01-01"), Some("2024-07-16"), true).contract_status(today),
            ContractStatus::Active
        );
    }

    #[test]
    fn test_account_validation() {
        let mut dto = B2bAccountDto::from_account(&account(Some("2024-01-01"), Some("2025-01-01"), true));
        assert!(dto.validate().is_ok());

        dto.discount_percent = 120.0;
        assert!(matches!(dto.validate(), Err(ValidationError::OutOfRange { .. })));
        dto.discount_percent = 5.0;

        dto.contract_end = Some(d("2023-12-31"));
        assert_eq!(dto.validate(), Err(ValidationError::DateRange));
        dto.contract_end = None;

        dto.billing_email = Some("billing-at-acme".into());
        assert_eq!(dto.validate(), Err(ValidationError::InvalidEmail("Billing email")));
    }

    #[test]
    fn test_contract_pricing_duplicates() {
        let price = |sid: &str, p: f64| ContractPrice {
            id: None,
            service_id: sid.into(),
            service_name: String::new(),
            contract_price: p,
            notes: None,
        };
        let dto = ContractPricingDto { prices: vec![price("s1", 10.0), price("s1", 12.0)] };
        assert_eq!(dto.validate(), Err(ValidationError::Duplicate("Service")));
        let dto = ContractPricingDto { prices: vec![price("s1", -1.0)] };
        assert_eq!(dto.validate(), Err(ValidationError::Negative("Contract price")));
        assert_eq!(savings_percent(200.0, 150.0), 25.0);
        assert_eq!(savings_percent(0.0, 150.0), 0.0);
    }
}
