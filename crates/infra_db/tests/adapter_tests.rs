//! Assembly adapter tests
//!
//! Drives the row → document assembly with realistic column payloads: JSON
//! relation columns, the overflow extend column, temporal normalization,
//! and the null-vs-empty contract.

use chrono::{TimeZone, Utc};
use infra_db::{assemble_proposal, assemble_quotation, ProposalRecord, ProposalRelationRecord};
use rust_decimal_macros::dec;

fn sample_record() -> ProposalRecord {
    ProposalRecord {
        quotation_no: Some("Q202400001".into()),
        proposal_no: Some("P202400001".into()),
        policy_no: Some("PLY202400001".into()),
        proposal_status_cd: Some("04".into()),
        quotation_status_cd: Some("02".into()),
        // 2024-01-15T01:30:00Z is 09:30:00 at the wire offset
        policy_start_dt: Some(Utc.with_ymd_and_hms(2024, 1, 15, 1, 30, 0).unwrap()),
        is_see_fee: Some("1".into()),
        is_group_policy: Some("1".into()),
        is_valid: Some(1),
        record_holder: Some(
            r#"{"recordHolderEmpNo":"E1001","recordHolderName":"张三"}"#.into(),
        ),
        handler_list: Some(
            r#"[{"handlerEmpNo":"E2001","handlerName":"赵处理"},
                {"handlerEmpNo":"E2002","handlerName":"钱候补"}]"#
                .into(),
        ),
        issue_org: Some(
            r#"{"issueOrgCode":"0102003","issueOrgName":"城东支公司",
                "issueOrgCodeList":["01","0102","0102003"],
                "issueOrg2LevelCode":"0102"}"#
                .into(),
        ),
        channel: Some(r#"{"agentCode":"AG9","agentName":"王代理"}"#.into()),
        extend_info: Some(
            r#"{"quotationValidity":15,
                "quotationValidityEndDt":"2024-01-30 09:30:00",
                "taxTotalAmount":360.00}"#
                .into(),
        ),
        fee: Some(r#"{"signPremium":"1280.00","signCurrencyCode":"CNY"}"#.into()),
        installment_info: Some(
            r#"[{"paymentAmount":"640.00","sequenceNo":1},
                {"paymentAmount":"640.00","sequenceNo":2}]"#
                .into(),
        ),
        ..Default::default()
    }
}

fn sample_relation() -> ProposalRelationRecord {
    ProposalRelationRecord {
        proposal_no: Some("P202400001".into()),
        participant_info: Some(
            r#"{"applicantList":[{"participantName":"张三","certNo":"110101199001010011"}],
                "insuredList":[{"participantName":"王小明","isMajorInsured":1}]}"#
                .into(),
        ),
        under_writing: Some(
            r#"{"underwritingNo":"UW1","underwritingStatusCd":"03"}"#.into(),
        ),
        subject_info: Some(
            r#"{"vehicleOwner":{"certNo":"110101199001010011","vehicleOwnerName":"陈车主"},
                "vehicleInfo":{"vin":"LFV2A21K8E3000001"},
                "transportName":"远望号"}"#
                .into(),
        ),
        union_insurance: Some(
            r#"{"unionInsuranceAgreementNo":"UA1","unionCoGuarantorList":[]}"#.into(),
        ),
        subject_group_info: Some("[]".into()),
        ..Default::default()
    }
}

#[test]
fn test_scalars_and_flags_copy_untouched() {
    let quotation = assemble_quotation(&sample_record(), None).unwrap();

    assert_eq!(quotation.quotation_no.as_deref(), Some("Q202400001"));
    assert_eq!(quotation.policy_no.as_deref(), Some("PLY202400001"));
    assert_eq!(quotation.is_see_fee.as_deref(), Some("1"));
    assert_eq!(quotation.is_valid, Some(1));
}

#[test]
fn test_temporal_columns_normalize_to_wire_offset() {
    let quotation = assemble_quotation(&sample_record(), None).unwrap();
    let start = quotation.policy_start_dt.unwrap();
    assert_eq!(start.encode(), "2024-01-15 09:30:00");
}

#[test]
fn test_json_columns_expand_into_document_fields() {
    let quotation = assemble_quotation(&sample_record(), None).unwrap();

    assert_eq!(quotation.record_holder_emp_no.as_deref(), Some("E1001"));
    assert_eq!(quotation.record_holder_name.as_deref(), Some("张三"));
    // First handler in stored order wins.
    assert_eq!(quotation.handler_emp_no.as_deref(), Some("E2001"));
    assert_eq!(quotation.handler_name.as_deref(), Some("赵处理"));
    assert_eq!(quotation.issue_org_code.as_deref(), Some("0102003"));
    assert_eq!(
        quotation.issue_org_code_list,
        Some(vec!["01".into(), "0102".into(), "0102003".into()])
    );
    assert_eq!(quotation.agent_name.as_deref(), Some("王代理"));
    assert_eq!(quotation.quotation_validity, Some(15));
    assert_eq!(quotation.tax_total_amount, Some(dec!(360.00)));
    assert_eq!(
        quotation.fee.as_ref().and_then(|f| f.sign_premium.as_deref()),
        Some("1280.00")
    );
}

#[test]
fn test_relation_row_populates_nested_sections() {
    let quotation = assemble_quotation(&sample_record(), Some(&sample_relation())).unwrap();

    let applicants = quotation.applicant_list.as_ref().unwrap();
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0].participant_name.as_deref(), Some("张三"));

    let insureds = quotation.insured_list.as_ref().unwrap();
    assert_eq!(insureds[0].is_major_insured, Some(1));

    assert_eq!(
        quotation
            .under_writing
            .as_ref()
            .and_then(|u| u.underwriting_no.as_deref()),
        Some("UW1")
    );
    assert_eq!(
        quotation
            .vehicle_owner
            .as_ref()
            .and_then(|o| o.vehicle_owner_name.as_deref()),
        Some("陈车主")
    );
    assert_eq!(quotation.transport_name.as_deref(), Some("远望号"));
}

#[test]
fn test_null_vs_empty_survives_assembly() {
    let quotation = assemble_quotation(&sample_record(), Some(&sample_relation())).unwrap();

    // union_insurance held "[]" for the guarantor list: populated, empty.
    assert_eq!(quotation.union_co_guarantor_list, Some(Vec::new()));
    // hull section never stored: absent, not empty.
    assert!(quotation.hull_list.is_none());

    // Without a relation row every nested section is unpopulated.
    let bare = assemble_quotation(&sample_record(), None).unwrap();
    assert!(bare.union_co_guarantor_list.is_none());
    assert!(bare.applicant_list.is_none());
}

#[test]
fn test_proposal_assembly_is_a_superset_of_quotation() {
    let record = sample_record();
    let relation = sample_relation();

    let quotation = assemble_quotation(&record, Some(&relation)).unwrap();
    let proposal = assemble_proposal(&record, Some(&relation)).unwrap();

    assert_eq!(proposal.quotation, quotation);
    assert_eq!(proposal.proposal_status_cd.as_deref(), Some("04"));
    assert_eq!(
        proposal
            .installment_list
            .as_ref()
            .map(|list| list.len()),
        Some(2)
    );
    assert_eq!(proposal.subject_group_list, Some(Vec::new()));
}

#[test]
fn test_broken_relation_column_is_an_error_not_a_partial_document() {
    let mut relation = sample_relation();
    relation.participant_info = Some("{broken".into());

    let err = assemble_proposal(&sample_record(), Some(&relation)).unwrap_err();
    assert!(err.to_string().contains("participant_info"));
}

#[test]
fn test_malformed_extend_timestamp_names_its_field_path() {
    let mut record = sample_record();
    record.extend_info = Some(r#"{"quotationValidityEndDt":"30/01/2024"}"#.into());

    let err = assemble_quotation(&record, None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("extendInfo.quotationValidityEndDt"));
    assert!(message.contains("30/01/2024"));
}

#[test]
fn test_assembly_is_deterministic() {
    let record = sample_record();
    let relation = sample_relation();

    let first = assemble_proposal(&record, Some(&relation)).unwrap();
    let second = assemble_proposal(&record, Some(&relation)).unwrap();
    assert_eq!(first, second);
}
