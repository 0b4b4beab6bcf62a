//! Row → document assembly
//!
//! Builds the nested [`Quotation`] and [`Proposal`] documents out of the
//! flat [`ProposalRecord`] row and its companion [`ProposalRelationRecord`].
//! Three rules hold throughout:
//!
//! - Scalar columns copy across untouched; `"0"`/`"1"` flags and opaque
//!   business numbers are never reinterpreted.
//! - Temporal columns normalize through the shared wire codec; a malformed
//!   embedded timestamp surfaces as a [`FormatError`] naming the dotted
//!   field path.
//! - JSON columns parse into their sub-documents with the column name
//!   attached to any parse failure. An SQL `NULL` (or blank, or the literal
//!   `null`) column yields `None`; a column holding `[]` yields
//!   `Some(vec![])` — the distinction is preserved, never normalized.
//!
//! Assembly is pure per row pair; concurrent callers share nothing.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use core_kernel::WireDateTime;
use domain_proposal::{
    Aircraft, Applicant, CoGuarantor, CoInsurance, Fee, HouseHold, Hull, Installment, Insured, Oa,
    Partner, Proposal, ProposalOrganizer, Quotation, RelatedProject, SubjectAddress, SubjectGroup,
    TruckTrancheScore, UnderWriting, VehicleInfo, VehicleInsure, VehicleOwner,
};
use rust_decimal::Decimal;

use crate::error::AssemblyError;
use crate::records::{ProposalRecord, ProposalRelationRecord};

/// Parses one JSON text column into its sub-document shape.
///
/// `None`, a blank string, and the literal `null` all mean the column was
/// never populated. Everything else must parse; failures carry the column
/// name.
fn parse_column<T: DeserializeOwned>(
    column: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, AssemblyError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(trimmed).map_err(|e| AssemblyError::relation(column, e))
}

fn wire(t: Option<chrono::DateTime<chrono::Utc>>) -> Option<WireDateTime> {
    t.map(WireDateTime::from_utc)
}

// Historical shapes of the wide row's own JSON columns. These never leave
// this module; the document types are the public contract.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordHolderColumn {
    record_holder_emp_no: Option<String>,
    record_holder_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HandlerColumn {
    handler_emp_no: Option<String>,
    handler_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueOrgColumn {
    issue_org_code: Option<String>,
    issue_org_name: Option<String>,
    issue_org_code_list: Option<Vec<String>>,
    issue_org2_level_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelColumn {
    agent_code: Option<String>,
    agent_name: Option<String>,
    agent_cert_no: Option<String>,
    partner_code: Option<String>,
    partner_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApproveInfoColumn {
    approve_biz_type: Option<String>,
    #[serde(rename = "signatureOANo")]
    signature_oa_no: Option<String>,
    #[serde(rename = "OAList")]
    oa_list: Option<Vec<Oa>>,
}

/// Overflow attributes without a dedicated column.
///
/// The validity deadline was historically appended here as a raw wire
/// string, so it decodes through the codec by hand rather than through a
/// typed field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtendColumn {
    quotation_validity: Option<i32>,
    quotation_validity_end_dt: Option<String>,
    show_quotation: Option<String>,
    tax_total_amount: Option<Decimal>,
    base_quotation_no: Option<String>,
}

// Shapes of the relation row's JSON columns.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParticipantInfoColumn {
    applicant_list: Option<Vec<Applicant>>,
    insured_list: Option<Vec<Insured>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubjectInfoColumn {
    vehicle_info: Option<VehicleInfo>,
    vehicle_owner: Option<VehicleOwner>,
    vehicle_insure: Option<VehicleInsure>,
    #[serde(rename = "cheHDTrackTrancheScoreDto")]
    truck_tranche_score: Option<TruckTrancheScore>,
    #[serde(rename = "hullMGList")]
    hull_list: Option<Vec<Hull>>,
    #[serde(rename = "aircraftMGList")]
    aircraft_list: Option<Vec<Aircraft>>,
    transport_name: Option<String>,
    subject_address: Option<SubjectAddress>,
    subject_detail_address: Option<String>,
    proposal_organizer_info: Option<ProposalOrganizer>,
    #[serde(rename = "houseHoldMG")]
    house_hold: Option<HouseHold>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnionInsuranceColumn {
    union_insurance_agreement_no: Option<String>,
    union_insurance_application_no: Option<String>,
    union_issue_org_code_list: Option<Vec<String>>,
    union_co_guarantor_list: Option<Vec<CoGuarantor>>,
}

/// Assembles a [`Quotation`] document from the wide row and, when present,
/// the relation row.
pub fn assemble_quotation(
    record: &ProposalRecord,
    relation: Option<&ProposalRelationRecord>,
) -> Result<Quotation, AssemblyError> {
    debug!(proposal_no = ?record.proposal_no, "assembling quotation document");

    let mut quotation = Quotation {
        // Identity, copied bit for bit
        quotation_order_no: record.quotation_order_no.clone(),
        quotation_order_type: record.quotation_order_type.clone(),
        quotation_no: record.quotation_no.clone(),
        proposal_no: record.proposal_no.clone(),
        policy_no: record.policy_no.clone(),

        // Temporal columns, normalized through the codec
        policy_start_dt: wire(record.policy_start_dt),
        policy_end_dt: wire(record.policy_end_dt),
        quotation_create_dt: wire(record.quotation_create_dt),
        sign_dt: wire(record.sign_dt),
        proposal_dt: wire(record.proposal_dt),
        create_dt: wire(record.created_at),
        modified_dt: wire(record.updated_at),
        policy_period_unit_cd: record.policy_period_unit_cd.clone(),
        policy_period: record.policy_period.clone(),

        quotation_status_cd: record.quotation_status_cd.clone(),
        creator: record.creator.clone(),
        is_valid: record.is_valid,

        // Sales channel
        biz_source_cd: record.biz_source_cd.clone(),
        is_direct_sale: record.is_direct_sale.clone(),
        system_source_code: record.system_source_code.clone(),
        system_source_level2_code: record.system_source_level2_code.clone(),

        // Product and scheme
        product_category_code: record.product_category_code.clone(),
        product_small_category_code: record.product_small_category_code.clone(),
        product_code: record.product_code.clone(),
        product_name: record.product_name.clone(),
        scheme_code: record.scheme_code.clone(),
        scheme_name: record.scheme_name.clone(),

        underwriting_method_cd: record.underwriting_method_cd.clone(),
        is_sign_report: record.is_sign_report.clone(),

        // Narrow-string flags stay exactly as stored
        is_see_fee: record.is_see_fee.clone(),
        is_group_policy: record.is_group_policy.clone(),
        agriculture_type_cd: record.agriculture_type_cd.clone(),
        installment_flag_cd: record.installment_flag_cd.clone(),
        coinsurance_flag_cd: record.coinsurance_flag_cd.clone(),
        is_facultative_reinsurance: record.is_facultative_reinsurance.clone(),
        is_facultative_reinsurance_in: record.is_facultative_reinsurance_in.clone(),
        customer_group_cd: record.customer_group_cd.clone(),

        fee: parse_column::<Fee>("fee", record.fee.as_deref())?,

        ..Default::default()
    };

    if let Some(holder) =
        parse_column::<RecordHolderColumn>("record_holder", record.record_holder.as_deref())?
    {
        quotation.record_holder_emp_no = holder.record_holder_emp_no;
        quotation.record_holder_name = holder.record_holder_name;
    }

    // The handler list keeps its stored order; the document carries the
    // first entry.
    if let Some(handlers) =
        parse_column::<Vec<HandlerColumn>>("handler_list", record.handler_list.as_deref())?
    {
        if let Some(first) = handlers.into_iter().next() {
            quotation.handler_emp_no = first.handler_emp_no;
            quotation.handler_name = first.handler_name;
        }
    }

    if let Some(issue_org) = parse_column::<IssueOrgColumn>("issue_org", record.issue_org.as_deref())? {
        quotation.issue_org_code = issue_org.issue_org_code;
        quotation.issue_org_name = issue_org.issue_org_name;
        quotation.issue_org_code_list = issue_org.issue_org_code_list;
        quotation.issue_org2_level_code = issue_org.issue_org2_level_code;
    }

    if let Some(channel) = parse_column::<ChannelColumn>("channel", record.channel.as_deref())? {
        quotation.agent_code = channel.agent_code;
        quotation.agent_name = channel.agent_name;
        quotation.agent_cert_no = channel.agent_cert_no;
        quotation.partner_code = channel.partner_code;
        quotation.partner_name = channel.partner_name;
    }

    if let Some(approve) =
        parse_column::<ApproveInfoColumn>("approve_info", record.approve_info.as_deref())?
    {
        quotation.approve_biz_type = approve.approve_biz_type;
        quotation.signature_oa_no = approve.signature_oa_no;
        quotation.oa_list = approve.oa_list;
    }

    if let Some(extend) = parse_column::<ExtendColumn>("extend_info", record.extend_info.as_deref())? {
        quotation.quotation_validity = extend.quotation_validity;
        quotation.show_quotation = extend.show_quotation;
        quotation.tax_total_amount = extend.tax_total_amount;
        quotation.base_quotation_no = extend.base_quotation_no;
        quotation.quotation_validity_end_dt = extend
            .quotation_validity_end_dt
            .as_deref()
            .map(|raw| WireDateTime::decode("extendInfo.quotationValidityEndDt", raw))
            .transpose()?;
    }

    if let Some(relation) = relation {
        quotation.under_writing =
            parse_column::<UnderWriting>("under_writing", relation.under_writing.as_deref())?;

        if let Some(participants) = parse_column::<ParticipantInfoColumn>(
            "participant_info",
            relation.participant_info.as_deref(),
        )? {
            quotation.applicant_list = participants.applicant_list;
            quotation.insured_list = participants.insured_list;
        }

        quotation.partner = parse_column::<Partner>("partner", relation.partner.as_deref())?;

        if let Some(subject) =
            parse_column::<SubjectInfoColumn>("subject_info", relation.subject_info.as_deref())?
        {
            quotation.vehicle_info = subject.vehicle_info;
            quotation.vehicle_owner = subject.vehicle_owner;
            quotation.vehicle_insure = subject.vehicle_insure;
            quotation.truck_tranche_score = subject.truck_tranche_score;
            quotation.hull_list = subject.hull_list;
            quotation.aircraft_list = subject.aircraft_list;
            quotation.transport_name = subject.transport_name;
        }

        if let Some(union_insurance) = parse_column::<UnionInsuranceColumn>(
            "union_insurance",
            relation.union_insurance.as_deref(),
        )? {
            quotation.union_insurance_agreement_no = union_insurance.union_insurance_agreement_no;
            quotation.union_insurance_application_no =
                union_insurance.union_insurance_application_no;
            quotation.union_issue_org_code_list = union_insurance.union_issue_org_code_list;
            quotation.union_co_guarantor_list = union_insurance.union_co_guarantor_list;
        }
    }

    Ok(quotation)
}

/// Assembles a [`Proposal`] document: the quotation assembly plus the
/// submission lifecycle columns.
pub fn assemble_proposal(
    record: &ProposalRecord,
    relation: Option<&ProposalRelationRecord>,
) -> Result<Proposal, AssemblyError> {
    let mut proposal = Proposal::from_quotation(assemble_quotation(record, relation)?);

    proposal.proposal_status_cd = record.proposal_status_cd.clone();
    proposal.proposal_create_dt = wire(record.proposal_create_dt);
    proposal.is_from_inquiry = record.is_from_inquiry.clone();
    proposal.trans_mode_cd = record.trans_mode_cd.clone();
    proposal.is_electronic_sign = record.is_electronic_sign.clone();
    proposal.is_effective_immediately = record.is_effective_immediately.clone();
    proposal.is_reserve_sign = record.is_reserve_sign.clone();

    proposal.installment_list =
        parse_column::<Vec<Installment>>("installment_info", record.installment_info.as_deref())?;
    proposal.related_project =
        parse_column::<RelatedProject>("related_project", record.related_project.as_deref())?;

    if let Some(relation) = relation {
        proposal.co_insurance =
            parse_column::<CoInsurance>("co_insurance", relation.co_insurance.as_deref())?;
        proposal.subject_group_list = parse_column::<Vec<SubjectGroup>>(
            "subject_group_info",
            relation.subject_group_info.as_deref(),
        )?;

        if let Some(subject) =
            parse_column::<SubjectInfoColumn>("subject_info", relation.subject_info.as_deref())?
        {
            proposal.subject_address = subject.subject_address;
            proposal.subject_detail_address = subject.subject_detail_address;
            proposal.proposal_organizer_info = subject.proposal_organizer_info;
            proposal.house_hold = subject.house_hold;
        }
    }

    Ok(proposal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_keeps_null_and_empty_apart() {
        // Unpopulated in all its historical spellings.
        assert!(parse_column::<Vec<Installment>>("c", None).unwrap().is_none());
        assert!(parse_column::<Vec<Installment>>("c", Some("")).unwrap().is_none());
        assert!(parse_column::<Vec<Installment>>("c", Some("  ")).unwrap().is_none());
        assert!(parse_column::<Vec<Installment>>("c", Some("null")).unwrap().is_none());

        // Populated with zero entries is a different fact.
        let parsed = parse_column::<Vec<Installment>>("c", Some("[]")).unwrap();
        assert_eq!(parsed, Some(Vec::new()));
    }

    #[test]
    fn test_parse_column_failure_names_the_column() {
        let err = parse_column::<Vec<Installment>>("installment_info", Some("{not json"))
            .unwrap_err();
        assert!(err.to_string().contains("installment_info"));
    }

    #[test]
    fn test_scalar_flags_copy_bit_for_bit() {
        let record = ProposalRecord {
            proposal_no: Some("P2024001".into()),
            is_see_fee: Some("1".into()),
            is_group_policy: Some("2".into()),
            is_valid: Some(1),
            ..Default::default()
        };
        let quotation = assemble_quotation(&record, None).unwrap();
        assert_eq!(quotation.proposal_no.as_deref(), Some("P2024001"));
        assert_eq!(quotation.is_see_fee.as_deref(), Some("1"));
        assert_eq!(quotation.is_group_policy.as_deref(), Some("2"));
        assert_eq!(quotation.is_valid, Some(1));
    }

    #[test]
    fn test_malformed_embedded_timestamp_names_the_field_path() {
        let record = ProposalRecord {
            extend_info: Some(r#"{"quotationValidityEndDt":"2024/01/15"}"#.into()),
            ..Default::default()
        };
        let err = assemble_quotation(&record, None).unwrap_err();
        assert!(err
            .to_string()
            .contains("extendInfo.quotationValidityEndDt"));
        assert!(err.to_string().contains("2024/01/15"));
    }
}
