//! Participant hierarchy
//!
//! A participant is a person or entity acting in a proposal. The shared
//! shape lives in [`ParticipantBase`]; role specializations embed it and
//! flatten it onto the wire, so an [`Applicant`] or [`Insured`] serializes
//! as one flat object. No behavior is specialized per role, only fields are
//! added, so the hierarchy is plain composition rather than dispatch.

use core_kernel::WireDate;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Identity fields shared by every proposal participant.
///
/// Certificate effective dates and the birth date are calendar days; they
/// still travel through the shared wire pattern with a zero time-of-day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantBase {
    /// Customer-domain uid
    pub uid: Option<String>,
    pub participant_name: Option<String>,
    /// Client classification: 1 individual, 2 enterprise, 3 non-enterprise org
    pub client_classify_cd: Option<String>,
    pub cert_type_cd: Option<String>,
    pub cert_no: Option<String>,
    pub cert_effective_start_dt: Option<WireDate>,
    pub cert_effective_end_dt: Option<WireDate>,
    pub contact_telephone: Option<String>,
    pub birth_date: Option<WireDate>,
    pub mobile_phone: Option<String>,
}

/// The applicant (policy holder to be) on a proposal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(flatten)]
    pub base: ParticipantBase,
    /// Special customer type for non-natural persons
    pub organization_type_cd: Option<String>,
    pub has_parent_org_name: Option<String>,
}

impl Deref for Applicant {
    type Target = ParticipantBase;

    fn deref(&self) -> &ParticipantBase {
        &self.base
    }
}

impl DerefMut for Applicant {
    fn deref_mut(&mut self) -> &mut ParticipantBase {
        &mut self.base
    }
}

/// An insured person on a proposal.
///
/// School fields are populated for insured minors on student lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insured {
    #[serde(flatten)]
    pub base: ParticipantBase,
    /// 1 when this entry is the major insured
    pub is_major_insured: Option<i32>,
    pub school: Option<String>,
    pub grade: Option<String>,
    pub clazz: Option<String>,
}

impl Deref for Insured {
    type Target = ParticipantBase;

    fn deref(&self) -> &ParticipantBase {
        &self.base
    }
}

impl DerefMut for Insured {
    fn deref_mut(&mut self) -> &mut ParticipantBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_specializations_flatten_base_fields() {
        let insured = Insured {
            base: ParticipantBase {
                participant_name: Some("王小明".into()),
                ..Default::default()
            },
            is_major_insured: Some(1),
            school: Some("实验小学".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&insured).unwrap();
        // Base fields sit at the same level as role fields.
        assert_eq!(value["participantName"], "王小明");
        assert_eq!(value["isMajorInsured"], 1);
        assert_eq!(value["school"], "实验小学");
    }

    #[test]
    fn test_base_fields_readable_through_role() {
        let applicant = Applicant {
            base: ParticipantBase {
                cert_no: Some("110101199001010011".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(applicant.cert_no.as_deref(), Some("110101199001010011"));
    }
}
