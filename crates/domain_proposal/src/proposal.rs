//! The proposal document
//!
//! A [`Proposal`] is a strict superset of a [`Quotation`]: it adds the
//! lifecycle fields that appear once a quote is submitted for cover
//! (status, payment state, audit, installment schedule, line-specific
//! sub-documents) and redefines nothing. The original modeled this as class
//! inheritance; here the quotation is embedded and flattened onto the wire,
//! with `Deref` keeping the accessor set flat — every quotation field reads
//! identically through a proposal.

use std::ops::{Deref, DerefMut};

use core_kernel::WireDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coinsurance::CoInsurance;
use crate::installment::Installment;
use crate::quotation::Quotation;
use crate::related::{Debtor, RelatedProject};
use crate::subject::{HouseHold, ProposalOrganizer, SubjectAddress, SubjectGroup};

/// A proposal: the quotation plus submission lifecycle state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Every quotation field, flattened onto the same wire level
    #[serde(flatten)]
    pub quotation: Quotation,

    // Status and audit
    pub proposal_status_cd: Option<String>,
    pub audit_stage_cd: Option<String>,
    pub audit_status_cd: Option<String>,
    /// "0"/"1": originated from an inquiry
    pub is_from_inquiry: Option<String>,
    pub proposal_create_dt: Option<WireDateTime>,
    /// Expiry of the proposal query code
    pub query_no_dt: Option<WireDateTime>,
    pub query_sequence_no: Option<String>,
    /// Renewal marker, integer on the wire
    pub renewal_flag_cd: Option<i32>,
    pub underwriting_end_dt: Option<WireDateTime>,
    pub verify_subject_task_no: Option<String>,
    /// Checklist completion state
    pub account_completed_status: Option<String>,

    // Payment
    pub pay_order_no: Option<String>,
    pub pay_serial_no: Option<String>,
    pub trans_mode_cd: Option<String>,
    pub payment_mode_cd: Option<String>,
    pub pay_complete_time: Option<WireDateTime>,
    /// Payment validity deadline
    pub payment_end_date: Option<WireDateTime>,
    /// Re-registration / refund failure reason
    pub issue_error_message: Option<String>,
    /// "0"/"1": premium paid on behalf of the applicant
    pub is_premium_behalf: Option<String>,

    // Signing and verification flags
    /// "0"/"1": SMS verification code required
    pub is_sms_verification: Option<String>,
    pub sms_send_phone: Option<String>,
    /// "0"/"1": effective immediately on issue
    pub is_effective_immediately: Option<String>,
    /// "0"/"1": backdated signing
    pub is_reserve_sign: Option<String>,
    /// "0"/"1": electronically signed
    pub is_electronic_sign: Option<String>,
    /// "0"/"1": dual-recording link sent
    pub is_send_double_record_link: Option<String>,
    /// "0"/"1": dual recording completed
    pub is_complete_double_record: Option<String>,
    /// "0"/"1": identity documents uploaded
    pub is_upload_identity_info: Option<String>,
    /// "0"/"1": electronic policy generated
    pub is_generate_policy: Option<String>,
    /// Manual issuance marker
    pub manual_issue_flag: Option<String>,

    // Templates
    pub is_template_proposal: Option<String>,
    pub template_proposal_no: Option<String>,
    /// Entry template id
    pub template_code: Option<String>,

    // Unit remittance
    pub remit_unit_name: Option<String>,
    pub remit_unit_customer_id: Option<String>,

    // Installments and subjects
    #[serde(rename = "installmentMGList")]
    pub installment_list: Option<Vec<Installment>>,
    #[serde(rename = "subjectGroupMGList")]
    pub subject_group_list: Option<Vec<SubjectGroup>>,

    // Agricultural line
    pub proposal_organizer_info: Option<ProposalOrganizer>,
    pub product_subject_code: Option<String>,
    pub product_subject_name: Option<String>,
    pub subject_small_category_code_list: Option<Vec<String>>,
    pub subject_address: Option<SubjectAddress>,
    pub subject_detail_address: Option<String>,
    /// Electronic-processing marker
    pub electronic_flag: Option<String>,
    /// Insured quantity, exact decimal
    pub insured_quantity: Option<Decimal>,
    /// Number of farmer households
    pub farmer_quantity: Option<Decimal>,
    /// Premium structure template id
    pub premium_structure_template_id: Option<String>,
    /// Related order number of the rural-support platform
    #[serde(rename = "orderNoXNB")]
    pub order_no_xnb: Option<String>,

    // Union and co-insurance
    pub union_policy_no: Option<Vec<String>>,
    pub co_insurance: Option<CoInsurance>,

    // Credit line
    pub related_project: Option<RelatedProject>,
    pub debtor: Option<Debtor>,

    // Project initiation
    pub project_initiation_code: Option<String>,
    pub project_initiation_name: Option<String>,
    pub project_version: Option<i32>,
    /// Government-health project type
    pub project_type: Option<String>,

    // Household line
    #[serde(rename = "houseHoldMG")]
    pub house_hold: Option<HouseHold>,

    // Vehicle-line query keys
    pub vin_nos: Option<Vec<String>>,

    // Re-registration helper: record holder and handler emp numbers merged
    pub handler_emp_no_and_record_holder_emp_nos: Option<Vec<String>>,
}

impl Deref for Proposal {
    type Target = Quotation;

    fn deref(&self) -> &Quotation {
        &self.quotation
    }
}

impl DerefMut for Proposal {
    fn deref_mut(&mut self) -> &mut Quotation {
        &mut self.quotation
    }
}

impl Proposal {
    /// Builds a proposal around an assembled quotation.
    pub fn from_quotation(quotation: Quotation) -> Self {
        Self {
            quotation,
            ..Default::default()
        }
    }

    /// True when an installment plan is populated (possibly empty).
    pub fn has_installment_plan(&self) -> bool {
        self.installment_list.is_some()
    }
}
