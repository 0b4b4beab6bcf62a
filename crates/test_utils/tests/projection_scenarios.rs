//! End-to-end projection scenarios
//!
//! Walks the whole read path in memory: relational record fixtures are
//! assembled into documents, then serialized on both channels. These are the
//! cross-crate scenarios the per-crate suites only cover piecewise.

use domain_proposal::{external_document, internal_document};
use infra_db::assemble_proposal;
use serde_json::json;
use test_utils::{
    assert_json_at, assert_json_null_at, json_at, ProposalBuilder, QuotationBuilder,
    RecordFixtures, StringFixtures, StubMasker, TemporalFixtures,
};

#[test]
fn test_record_to_external_document_masks_sensitive_names() {
    let record = RecordFixtures::proposal_record();
    let relation = RecordFixtures::relation_record();

    let proposal = assemble_proposal(&record, Some(&relation)).unwrap();
    let external = external_document(&proposal, &StubMasker).unwrap();

    // 张三 was stored canonically; the external channel sees 张*.
    assert_json_at(&external, "recordHolderName", &json!("张*"));
    assert_json_at(&external, "vehicleOwner.vehicleOwnerName", &json!("陈**"));
    assert_json_at(
        &external,
        "vehicleOwner.certNo",
        &json!("1*****************"),
    );
    // Participant certNo is not in the sensitive table.
    assert_json_at(
        &external,
        "applicantList",
        &json!([{
            "participantName": "张三",
            "certNo": StringFixtures::cert_no(),
            "uid": null,
            "clientClassifyCd": null,
            "certTypeCd": null,
            "certEffectiveStartDt": null,
            "certEffectiveEndDt": null,
            "contactTelephone": null,
            "birthDate": null,
            "mobilePhone": null,
            "organizationTypeCd": null,
            "hasParentOrgName": null
        }]),
    );
}

#[test]
fn test_record_to_internal_document_keeps_canonical_values() {
    let record = RecordFixtures::proposal_record();
    let relation = RecordFixtures::relation_record();

    let proposal = assemble_proposal(&record, Some(&relation)).unwrap();
    let internal = internal_document(&proposal).unwrap();

    assert_json_at(
        &internal,
        "recordHolderName",
        &json!(StringFixtures::record_holder_name()),
    );
    assert_json_at(
        &internal,
        "vehicleOwner.certNo",
        &json!(StringFixtures::cert_no()),
    );
    // The aggregate itself still carries the canonical value afterwards.
    assert_eq!(proposal.record_holder_name.as_deref(), Some("张三"));
}

#[test]
fn test_temporal_columns_reach_the_wire_in_pattern_form() {
    let record = RecordFixtures::proposal_record();
    let proposal = assemble_proposal(&record, None).unwrap();
    let document = internal_document(&proposal).unwrap();

    assert_json_at(
        &document,
        "policyStartDt",
        &json!(TemporalFixtures::policy_start_wire()),
    );
    assert_json_at(
        &document,
        "quotationValidityEndDt",
        &json!("2024-01-30 09:30:00"),
    );
}

#[test]
fn test_null_vs_empty_reaches_the_wire() {
    let record = RecordFixtures::proposal_record();
    let relation = RecordFixtures::relation_record();

    let proposal = assemble_proposal(&record, Some(&relation)).unwrap();
    let document = internal_document(&proposal).unwrap();

    // Stored "[]" serializes as [], never null.
    assert_json_at(&document, "unionCoGuarantorList", &json!([]));
    // Never-stored sections serialize as null, never [].
    assert_json_null_at(&document, "hullMGList");
    assert_json_null_at(&document, "installmentMGList");
}

#[test]
fn test_builders_compose_with_the_channels() {
    let quotation = QuotationBuilder::new()
        .with_record_holder_name("张三")
        .with_agent_name("王代理")
        .build();
    let proposal = ProposalBuilder::new().with_quotation(quotation).build();

    let external = external_document(&proposal, &StubMasker).unwrap();
    assert_json_at(&external, "recordHolderName", &json!("张*"));
    assert_json_at(&external, "agentName", &json!("王**"));
    // Quotation identity flattens through the proposal wrapper.
    assert_json_at(
        &external,
        "proposalNo",
        &json!(StringFixtures::proposal_no()),
    );
}

#[test]
fn test_external_projection_is_idempotent() {
    let proposal = ProposalBuilder::new()
        .with_quotation(
            QuotationBuilder::new()
                .with_record_holder_name("张三")
                .build(),
        )
        .build();

    let first = external_document(&proposal, &StubMasker).unwrap();
    // Projecting the same aggregate again yields the same redacted view:
    // masking reads the canonical value, not its own prior output.
    let second = external_document(&proposal, &StubMasker).unwrap();
    assert_eq!(first, second);

    let masked = json_at(&first, "recordHolderName").unwrap();
    assert_eq!(masked, &json!("张*"));
}
