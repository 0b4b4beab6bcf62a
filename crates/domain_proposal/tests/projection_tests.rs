//! Serialization-channel tests
//!
//! Exercises the sensitive-field table against full documents: external
//! serialization redacts, internal serialization and the in-memory aggregate
//! never change.

use core_kernel::{MaskingService, SensitiveCategory};
use domain_proposal::{
    external_document, internal_document, sensitive_fields, Proposal, Quotation, VehicleOwner,
};

/// Fixed-output masker standing in for the real redaction collaborator.
struct StarMasker;

impl MaskingService for StarMasker {
    fn redact(&self, _category: SensitiveCategory, value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => format!("{first}{}", "*".repeat(chars.count())),
            None => String::new(),
        }
    }
}

fn sample_proposal() -> Proposal {
    Proposal {
        quotation: Quotation {
            proposal_no: Some("P202400777".into()),
            record_holder_name: Some("张三".into()),
            handler_name: Some("赵处理".into()),
            agent_name: Some("王代理".into()),
            vehicle_owner: Some(VehicleOwner {
                uid: Some("VO-1".into()),
                cert_type_cd: Some("01".into()),
                cert_no: Some("110101199001010011".into()),
                vehicle_owner_name: Some("陈车主".into()),
            }),
            ..Default::default()
        },
        proposal_status_cd: Some("04".into()),
        ..Default::default()
    }
}

#[test]
fn test_external_document_redacts_every_tagged_field() {
    let proposal = sample_proposal();
    let value = external_document(&proposal, &StarMasker).unwrap();

    assert_eq!(value["recordHolderName"], "张*");
    assert_eq!(value["handlerName"], "赵**");
    assert_eq!(value["agentName"], "王**");
    assert_eq!(value["vehicleOwner"]["certNo"], "1*****************");
    assert_eq!(value["vehicleOwner"]["vehicleOwnerName"], "陈**");
}

#[test]
fn test_untagged_fields_pass_through_unchanged() {
    let proposal = sample_proposal();
    let value = external_document(&proposal, &StarMasker).unwrap();

    assert_eq!(value["proposalNo"], "P202400777");
    assert_eq!(value["proposalStatusCd"], "04");
    // The owner's cert type is not in the table; only certNo and the name are.
    assert_eq!(value["vehicleOwner"]["certTypeCd"], "01");
}

#[test]
fn test_participant_cert_no_is_not_masked() {
    use domain_proposal::{Applicant, ParticipantBase};

    let quotation = Quotation {
        applicant_list: Some(vec![Applicant {
            base: ParticipantBase {
                cert_no: Some("110101199001010011".into()),
                ..Default::default()
            },
            ..Default::default()
        }]),
        ..Default::default()
    };
    let value = external_document(&quotation, &StarMasker).unwrap();
    // Path-keyed: vehicleOwner.certNo is sensitive, applicantList certNo is not.
    assert_eq!(value["applicantList"][0]["certNo"], "110101199001010011");
}

#[test]
fn test_internal_document_keeps_canonical_values() {
    let proposal = sample_proposal();
    let value = internal_document(&proposal).unwrap();

    assert_eq!(value["recordHolderName"], "张三");
    assert_eq!(value["vehicleOwner"]["certNo"], "110101199001010011");
}

#[test]
fn test_masking_never_mutates_the_aggregate() {
    let proposal = sample_proposal();
    let _ = external_document(&proposal, &StarMasker).unwrap();

    assert_eq!(proposal.record_holder_name.as_deref(), Some("张三"));
    assert_eq!(
        proposal
            .vehicle_owner
            .as_ref()
            .and_then(|o| o.cert_no.as_deref()),
        Some("110101199001010011")
    );
    // Serializing again externally yields the same redacted view.
    let again = external_document(&proposal, &StarMasker).unwrap();
    assert_eq!(again["recordHolderName"], "张*");
}

#[test]
fn test_unpopulated_sensitive_fields_stay_null() {
    let value = external_document(&Quotation::default(), &StarMasker).unwrap();
    assert!(value["recordHolderName"].is_null());
    assert!(value["agentName"].is_null());
}

#[test]
fn test_sensitive_table_contents_are_auditable() {
    let table = sensitive_fields();
    assert_eq!(table.len(), 5);
    for path in [
        "recordHolderName",
        "handlerName",
        "agentName",
        "vehicleOwner.certNo",
        "vehicleOwner.vehicleOwnerName",
    ] {
        assert_eq!(table.category_of(path), Some(SensitiveCategory::Default));
    }
}
