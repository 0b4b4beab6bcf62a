//! Premium and insured-amount rollup
//!
//! `Fee` is a denormalized bag of amounts and rates: one field per financial
//! subsidy tier plus totals, exactly as the write side recorded them. No
//! field is derived from another here, and every amount is an opaque string
//! on this layer; numeric interpretation belongs to pricing/accounting.

use serde::{Deserialize, Serialize};

/// Premium, insured amount, and the per-tier subsidy breakdown.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    /// Signed premium in the signing currency
    pub sign_premium: Option<String>,
    pub sign_currency_code: Option<String>,
    pub sign_currency_name: Option<String>,
    /// Total insured amount in the local currency
    pub local_currency_insured_amount: Option<String>,
    pub local_currency_sign_premium: Option<String>,
    pub local_currency_with_tax_premium: Option<String>,
    pub local_currency_no_tax_premium: Option<String>,
    pub local_currency_tax_amount: Option<String>,
    /// Central government subsidy
    pub central_financial_subsidy_rate: Option<String>,
    pub central_financial_subsidy_amount: Option<String>,
    /// Province-level subsidy
    pub province_subsidy_rate: Option<String>,
    pub province_subsidy_amount: Option<String>,
    /// City-level subsidy
    pub city_subsidy_rate: Option<String>,
    pub city_subsidy_amount: Option<String>,
    /// County-level subsidy
    pub county_subsidy_rate: Option<String>,
    pub county_subsidy_amount: Option<String>,
    /// Township-level subsidy
    pub township_subsidy_rate: Option<String>,
    pub township_subsidy_amount: Option<String>,
    /// Leading-enterprise subsidy
    pub leading_enterprises_subsidy_rate: Option<String>,
    pub leading_enterprises_subsidy_amount: Option<String>,
    /// Remaining subsidy sources
    pub other_subsidy_rate: Option<String>,
    pub other_subsidy_amount: Option<String>,
    /// Farmer self-paid share
    pub peasant_premium_rate: Option<String>,
    pub peasant_premium_amount: Option<String>,
    pub total_rate: Option<String>,
    pub total_amount: Option<String>,
    /// Farmer premium
    pub subsidy_amount: Option<String>,
    /// Farmer special subsidy amount
    pub agriculture_subsidy_amount: Option<String>,
    /// Total insured amount
    pub insured_amount: Option<String>,
}
