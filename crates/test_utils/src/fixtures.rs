//! Pre-built Test Fixtures
//!
//! Ready-to-use wire values, business numbers, and record shapes, kept
//! consistent and predictable so assertions can use literal expectations.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::WireDateTime;
use infra_db::{ProposalRecord, ProposalRelationRecord};

/// Fixture for wire-format temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The canonical round-trip instant: 09:30 local at the wire offset.
    pub fn policy_start() -> WireDateTime {
        WireDateTime::from_wire_parts(2024, 1, 15, 9, 30, 0).unwrap()
    }

    /// Matching wire string for [`Self::policy_start`].
    pub fn policy_start_wire() -> &'static str {
        "2024-01-15 09:30:00"
    }

    /// End of the standard one-year policy window.
    pub fn policy_end() -> WireDateTime {
        WireDateTime::from_wire_parts(2025, 1, 14, 23, 59, 59).unwrap()
    }

    /// The policy start as a UTC column value (01:30 UTC is 09:30 at +8).
    pub fn policy_start_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 1, 30, 0).unwrap()
    }

    /// A wire string no codec should accept.
    pub fn malformed_wire() -> &'static str {
        "15/01/2024 09:30"
    }
}

/// Fixture for business-number strings
pub struct StringFixtures;

impl StringFixtures {
    pub fn quotation_no() -> &'static str {
        "Q202400001"
    }

    pub fn proposal_no() -> &'static str {
        "P202400001"
    }

    pub fn policy_no() -> &'static str {
        "PLY202400001"
    }

    /// A resident identity number for masking assertions.
    pub fn cert_no() -> &'static str {
        "110101199001010011"
    }

    /// Canonical sensitive name used across the masking scenarios.
    pub fn record_holder_name() -> &'static str {
        "张三"
    }
}

/// Fixture for relational record shapes
pub struct RecordFixtures;

impl RecordFixtures {
    /// A wide row populated the way the vehicle line stores it: scalar
    /// facts, a record holder blob, and an overflow extend column.
    pub fn proposal_record() -> ProposalRecord {
        ProposalRecord {
            quotation_no: Some(StringFixtures::quotation_no().into()),
            proposal_no: Some(StringFixtures::proposal_no().into()),
            policy_no: Some(StringFixtures::policy_no().into()),
            proposal_status_cd: Some("04".into()),
            quotation_status_cd: Some("02".into()),
            policy_start_dt: Some(TemporalFixtures::policy_start_utc()),
            is_see_fee: Some("1".into()),
            is_valid: Some(1),
            record_holder: Some(
                r#"{"recordHolderEmpNo":"E1001","recordHolderName":"张三"}"#.into(),
            ),
            channel: Some(r#"{"agentCode":"AG9","agentName":"王代理"}"#.into()),
            extend_info: Some(
                r#"{"quotationValidity":15,"quotationValidityEndDt":"2024-01-30 09:30:00"}"#
                    .into(),
            ),
            fee: Some(r#"{"signPremium":"1280.00","signCurrencyCode":"CNY"}"#.into()),
            ..Default::default()
        }
    }

    /// A relation row with participants, a vehicle section, and an empty
    /// (but populated) union guarantor list.
    pub fn relation_record() -> ProposalRelationRecord {
        ProposalRelationRecord {
            proposal_no: Some(StringFixtures::proposal_no().into()),
            participant_info: Some(
                r#"{"applicantList":[{"participantName":"张三","certNo":"110101199001010011"}],
                    "insuredList":[{"participantName":"王小明","isMajorInsured":1}]}"#
                    .into(),
            ),
            subject_info: Some(
                r#"{"vehicleOwner":{"certNo":"110101199001010011","vehicleOwnerName":"陈车主"}}"#
                    .into(),
            ),
            union_insurance: Some(r#"{"unionCoGuarantorList":[]}"#.into()),
            ..Default::default()
        }
    }
}
