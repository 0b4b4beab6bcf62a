//! Relational records backing the document assembly
//!
//! These are flat row shapes, read straight out of PostgreSQL with
//! `sqlx::FromRow`. Scalar facts live as columns on [`ProposalRecord`];
//! everything nested was historically persisted as JSON text, either in the
//! wide row's own JSON columns or in the companion relation row keyed by
//! proposal number. The records carry raw column values only; all
//! interpretation happens in [`crate::adapters`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// The wide proposal row: one row per proposal, scalar facts plus a handful
/// of JSON text columns for embedded blobs.
///
/// Code and flag columns stay `Option<String>` exactly as stored; nothing
/// here coerces `"0"`/`"1"` into booleans.
#[derive(Debug, Clone, Default, FromRow)]
pub struct ProposalRecord {
    // Audit columns shared by every table
    pub id: Uuid,
    pub creator: Option<String>,
    pub modifier: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_valid: Option<i32>,

    // Business keys
    pub quotation_order_no: Option<String>,
    pub quotation_order_type: Option<String>,
    pub quotation_no: Option<String>,
    pub proposal_no: Option<String>,
    pub external_order_no: Option<String>,
    pub policy_no: Option<String>,

    // Lifecycle
    pub is_from_inquiry: Option<String>,
    pub underwriting_method_cd: Option<String>,
    pub proposal_method_cd: Option<String>,
    pub proposal_dt: Option<DateTime<Utc>>,
    pub proposal_copies: Option<i32>,
    pub quotation_create_dt: Option<DateTime<Utc>>,
    pub proposal_create_dt: Option<DateTime<Utc>>,
    pub is_read_clause: Option<String>,
    pub quotation_status_cd: Option<String>,
    pub proposal_status_cd: Option<String>,
    pub sign_dt: Option<DateTime<Utc>>,

    // Policy window and shape
    pub policy_category_cd: Option<String>,
    pub policy_type_cd: Option<String>,
    pub policy_period_unit_cd: Option<String>,
    pub policy_period: Option<String>,
    pub policy_start_dt: Option<DateTime<Utc>>,
    pub policy_end_dt: Option<DateTime<Utc>>,
    pub is_group_policy: Option<String>,
    pub is_auto_transfer_new: Option<String>,
    pub hesitation_deadline_dt: Option<DateTime<Utc>>,
    pub waiting_period_deadline_dt: Option<DateTime<Utc>>,

    // Agriculture
    pub is_agriculture: Option<String>,
    pub agriculture_type_cd: Option<String>,
    pub is_hand_made_ticket: Option<String>,
    pub hand_made_ticket_no: Option<String>,
    pub subsidy_flag_cd: Option<String>,

    // Policy flags
    pub is_electron_policy: Option<String>,
    pub is_commerce_reinsurance: Option<String>,
    pub is_cross_sale: Option<String>,
    pub installment_flag_cd: Option<String>,
    pub installment_period: Option<i32>,
    pub installment_interval: Option<i32>,
    pub installment_interval_unit_cd: Option<String>,
    pub is_see_fee: Option<String>,
    pub proposal_label_cd: Option<String>,
    pub trans_mode_cd: Option<String>,
    pub largess_flag_cd: Option<String>,
    pub is_facultative_reinsurance: Option<String>,
    pub is_facultative_reinsurance_in: Option<String>,

    // Dispute resolution
    pub dispute_resolution_cd: Option<String>,
    pub judicial_scope_cd: Option<String>,
    pub arbitration_agency_cd: Option<String>,
    pub arbitration_agency_name: Option<String>,

    pub online: Option<String>,
    pub is_agree_customer_share: Option<String>,
    pub is_sign_report: Option<String>,
    pub limit_reserve_sign_days: Option<i32>,
    pub is_supplementary: Option<String>,
    pub is_supply_insured: Option<String>,
    pub fee_rate: Option<Decimal>,
    pub anti_money_laundering_flag_cd: Option<i32>,
    pub is_remote_underwrite: Option<String>,

    // Sales channel
    pub system_source_code: Option<String>,
    pub system_source_level2_code: Option<String>,
    pub is_direct_sale: Option<String>,
    pub biz_source_cd: Option<String>,
    pub biz_source_path: Option<String>,
    pub biz_source_category_cd: Option<String>,
    pub channel_type_cd: Option<String>,

    pub is_effective_immediately: Option<String>,
    pub is_reserve_sign: Option<String>,
    pub comment: Option<String>,
    pub language_cd: Option<String>,

    // JSON text columns
    pub installment_info: Option<String>,
    pub extend_info: Option<String>,
    pub deductible: Option<String>,
    #[sqlx(rename = "limit")]
    pub coverage_limit: Option<String>,
    pub issue_org: Option<String>,
    pub sign_org: Option<String>,
    pub record_holder: Option<String>,
    pub handler_list: Option<String>,
    pub fee: Option<String>,
    pub channel: Option<String>,
    pub related_project: Option<String>,
    pub related_third_party_list: Option<String>,
    pub followfee: Option<String>,
    pub customer_contact: Option<String>,
    pub policy_relation_info: Option<String>,
    pub approve_info: Option<String>,
    pub health_notice: Option<String>,
    pub supplementary_clause_info: Option<String>,

    // Product and scheme
    pub product_category_code: Option<String>,
    pub product_category_name: Option<String>,
    pub product_small_category_code: Option<String>,
    pub product_small_category_name: Option<String>,
    pub product_code: Option<String>,
    pub product_name: Option<String>,
    pub product_version: Option<String>,
    pub scheme_type_cd: Option<String>,
    pub scheme_code: Option<String>,
    pub scheme_version: Option<String>,
    pub scheme_name: Option<String>,
    pub family_policy_flag_cd: Option<String>,
    pub short_term_policy_flag_cd: Option<String>,

    pub value_added_expense_amount: Option<Decimal>,
    pub customer_level_label_cd: Option<String>,
    pub is_electronic_sign: Option<String>,
    pub is_video_assistant: Option<String>,
    pub coinsurance_flag_cd: Option<String>,
    pub customer_group_cd: Option<String>,
}

/// The companion relation row: one row per proposal number, every column a
/// JSON text blob holding one nested section of the document.
///
/// An SQL `NULL` column means the section was never populated; a column
/// holding `[]` means populated with zero entries. The adapter keeps the
/// two apart.
#[derive(Debug, Clone, Default, FromRow)]
pub struct ProposalRelationRecord {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_valid: Option<i32>,

    pub proposal_no: Option<String>,

    pub under_writing: Option<String>,
    pub participant_info: Option<String>,
    pub partner: Option<String>,
    pub scheme_plan: Option<String>,
    pub subject_info: Option<String>,
    pub subject_group_info: Option<String>,
    pub special_term: Option<String>,
    pub co_insurance: Option<String>,
    pub union_insurance: Option<String>,
    pub reinsurance: Option<String>,
    pub third_internet_company: Option<String>,
    pub facultative_reinsurance_in: Option<String>,
    pub exclusive: Option<String>,
    pub risk_survey: Option<String>,
    pub clause_info: Option<String>,
}
