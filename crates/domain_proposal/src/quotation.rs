//! The quotation document
//!
//! A [`Quotation`] is the top-level aggregate for a price quote: identity
//! numbers, parties, financial terms, organizational routing, and the
//! composite sub-documents of whichever product line it belongs to. It is
//! assembled by the read path and immutable from the consumer's
//! perspective.
//!
//! Field representation follows the wire contract, not Rust taste: flags
//! recorded as `"0"`/`"1"` strings stay strings, the few integer flags stay
//! `i32`, every identifier is an opaque string, and decimal amounts use
//! exact decimals.

use std::collections::BTreeSet;

use core_kernel::WireDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coinsurance::CoGuarantor;
use crate::fee::Fee;
use crate::participant::{Applicant, Insured};
use crate::related::{Oa, Partner};
use crate::underwriting::UnderWriting;
use crate::vehicle::{Aircraft, Hull, TruckTrancheScore, VehicleInfo, VehicleInsure, VehicleOwner};

/// A price quote with its parties, terms, and per-line sub-documents.
///
/// Lists preserve population order and are never deduplicated here. A `None`
/// sub-document or list means "not populated for this product line";
/// `Some(vec![])` means "populated, zero entries" — the two never collapse
/// into each other.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    // Identity and related order numbers
    pub quotation_order_no: Option<String>,
    pub quotation_order_type: Option<String>,
    pub quotation_no: Option<String>,
    pub proposal_no: Option<String>,
    pub policy_no: Option<String>,
    pub batch_no: Option<String>,
    /// Document-center unique id
    pub business_no: Option<String>,
    /// Document-center scene code
    pub scene_code: Option<String>,
    /// Imaging id
    pub serial_no: Option<String>,
    /// First quotation number of a multi-version quote
    pub base_quotation_no: Option<String>,
    /// Proposal/quotation numbers of related cross-line policies
    pub relation_nos: Option<Vec<String>>,

    // Policy window and lifecycle timestamps
    pub policy_start_dt: Option<WireDateTime>,
    pub policy_end_dt: Option<WireDateTime>,
    pub quotation_create_dt: Option<WireDateTime>,
    pub sign_dt: Option<WireDateTime>,
    pub proposal_dt: Option<WireDateTime>,
    pub under_writing_pass_dt: Option<WireDateTime>,
    pub create_dt: Option<WireDateTime>,
    pub modified_dt: Option<WireDateTime>,
    pub policy_period_unit_cd: Option<String>,
    pub policy_period: Option<String>,

    // Quote status and validity
    pub quotation_status_cd: Option<String>,
    /// "1" when the quote is shown to the customer
    pub show_quotation: Option<String>,
    /// Validity span of the quote, in days
    pub quotation_validity: Option<i32>,
    pub quotation_validity_end_dt: Option<WireDateTime>,
    /// Quotation snapshot flag
    pub inquiry_snapshot_flag: Option<String>,

    // Parties
    pub applicant_list: Option<Vec<Applicant>>,
    pub insured_list: Option<Vec<Insured>>,
    pub record_holder_emp_no: Option<String>,
    /// Sensitive: masked on the external channel
    pub record_holder_name: Option<String>,
    pub handler_emp_no: Option<String>,
    /// Sensitive: masked on the external channel
    pub handler_name: Option<String>,
    pub agent_code: Option<String>,
    /// Sensitive: masked on the external channel
    pub agent_name: Option<String>,
    pub agent_cert_no: Option<String>,
    /// Assisting insurance officer id
    pub assist_insure_person_id: Option<String>,
    pub creator: Option<String>,

    // Financial terms
    pub fee: Option<Fee>,
    /// Vehicle-and-vessel tax total
    pub tax_total_amount: Option<Decimal>,

    // Organizational routing
    /// Owning org chain, parent orgs first
    pub biz_org_code_list: Option<Vec<String>>,
    pub biz_org_code: Option<String>,
    pub biz_org_name: Option<String>,
    pub issue_org_code_list: Option<Vec<String>>,
    pub issue_org_code: Option<String>,
    pub issue_org_name: Option<String>,
    pub issue_org2_level_code: Option<String>,

    // Sales channel
    pub biz_source_cd: Option<String>,
    /// "0"/"1": direct sale
    pub is_direct_sale: Option<String>,
    pub system_source_code: Option<String>,
    /// Second-level source, e.g. the channel code for channel business
    pub system_source_level2_code: Option<String>,
    pub partner_code: Option<String>,
    pub partner_name: Option<String>,
    pub partner: Option<Partner>,

    // Product and scheme
    pub product_category_code: Option<String>,
    pub product_small_category_code: Option<String>,
    /// Related product categories
    pub product_category_codes: Option<BTreeSet<String>>,
    pub product_code: Option<String>,
    pub product_name: Option<String>,
    pub scheme_code: Option<String>,
    pub scheme_name: Option<String>,
    pub scheme_print_name: Option<String>,

    // Underwriting
    pub underwriting_method_cd: Option<String>,
    #[serde(rename = "underWritingDTO")]
    pub under_writing: Option<UnderWriting>,
    /// "0"/"1": escalated to special approval
    pub is_sign_report: Option<String>,
    pub approve_biz_type: Option<String>,
    /// OA countersign number for special approval
    #[serde(rename = "signatureOANo")]
    pub signature_oa_no: Option<String>,
    #[serde(rename = "OAList")]
    pub oa_list: Option<Vec<Oa>>,

    // Narrow-string flags, preserved per field
    /// "0"/"1": pay-before-issue
    pub is_see_fee: Option<String>,
    pub non_see_fee_order_mode: Option<String>,
    /// "1" individual, "2" group
    pub is_group_policy: Option<String>,
    /// "0"/"1": group policy with individual payment
    pub is_group_personal_pay: Option<String>,
    /// "0" commercial, "1" policy-supported agriculture
    pub agriculture_type_cd: Option<String>,
    /// "1" installment, "2" single payment
    pub installment_flag_cd: Option<String>,
    pub coinsurance_flag_cd: Option<String>,
    /// "0"/"1": facultative reinsurance ceded
    pub is_facultative_reinsurance: Option<String>,
    /// "0"/"1": facultative reinsurance assumed
    pub is_facultative_reinsurance_in: Option<String>,
    pub is_special_declaration_identification: Option<String>,
    pub is_contract_exclusion_identification: Option<String>,
    pub is_split_hazardous_unit_identification: Option<String>,
    /// "0"/"1": unit remittance
    pub remit_unit_flag: Option<String>,
    /// "1" primary coverage, "0" rider
    pub primary_insurance: Option<String>,
    pub timed_correction_flag: Option<String>,
    /// Dual commercial/compulsory issuance marker
    pub related_policy_type: Option<String>,

    // Integer flags kept as integers per the wire
    /// 1 means the row is live
    pub is_valid: Option<i32>,

    // Customer grouping
    /// KQ01 individual, KQ02 group, KQ03 government
    pub customer_group_cd: Option<String>,

    // Fleet
    pub fleet_no: Option<String>,
    pub fleet_version: Option<String>,
    pub is_fleet: Option<String>,

    // Vehicle line
    pub vehicle_info: Option<VehicleInfo>,
    pub vehicle_owner: Option<VehicleOwner>,
    pub vehicle_insure: Option<VehicleInsure>,
    #[serde(rename = "cheHDTrackTrancheScoreDto")]
    pub truck_tranche_score: Option<TruckTrancheScore>,

    // Co-insurance and union-insurance agreements
    pub coinsurance_application_no: Option<String>,
    pub coinsurance_agreement_no: Option<String>,
    pub union_insurance_agreement_no: Option<String>,
    pub union_insurance_application_no: Option<String>,
    /// Issue orgs of the follower side
    pub union_issue_org_code_list: Option<Vec<String>>,
    pub union_co_guarantor_list: Option<Vec<CoGuarantor>>,

    // Marine and aviation lines
    #[serde(rename = "hullMGList")]
    pub hull_list: Option<Vec<Hull>>,
    #[serde(rename = "aircraftMGList")]
    pub aircraft_list: Option<Vec<Aircraft>>,

    // Cargo line
    /// Conveyance name
    pub transport_name: Option<String>,

    // Regulator-facing query keys
    pub supervise_biz_no: Option<String>,
    /// "1" when sourced from the supervised platform
    pub is_htb: Option<String>,

    // Project linkage
    pub subject_project_name: Option<String>,
    pub project_code: Option<String>,
}

impl Quotation {
    /// True when any vehicle-line sub-document is attached.
    pub fn has_vehicle_section(&self) -> bool {
        self.vehicle_info.is_some()
            || self.vehicle_owner.is_some()
            || self.vehicle_insure.is_some()
    }

    /// True when the quotation takes part in a co- or union-insurance
    /// arrangement.
    pub fn has_coinsurance_agreement(&self) -> bool {
        self.coinsurance_agreement_no.is_some() || self.union_insurance_agreement_no.is_some()
    }
}
