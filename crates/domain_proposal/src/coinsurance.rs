//! Co-insurance and union-insurance sub-documents

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One co-insurance/union-insurance participant.
///
/// Premium and amount require exact decimal semantics; they are currency
/// values and must never pass through a binary float.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoGuarantor {
    /// "1" when this participant is the leading co-insurer
    pub is_master_coinsurance: Option<String>,
    pub coinsurance_issue_org_customer_id: Option<String>,
    pub coinsurance_company_type: Option<String>,
    /// Share percentage of this participant
    pub coinsurance_proportion: Option<Decimal>,
    /// Premium share including tax
    pub coinsurance_premium: Option<Decimal>,
    /// Insured-amount share
    pub coinsurance_amount: Option<Decimal>,
    pub coinsurance_company_code: Option<String>,
    pub union_coinsurance_type: Option<String>,
    /// Issue-org path of the follower side of a union arrangement
    pub union_coinsurance_issue_org_code_path: Option<Vec<String>>,
}

/// Co-insurance arrangement attached to a proposal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoInsurance {
    pub co_guarantor_list: Option<Vec<CoGuarantor>>,
    /// Premium collection: 02 leader collects for all, 03 each collects its share
    pub premium_collect_method_cd: Option<String>,
}
