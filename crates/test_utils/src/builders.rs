//! Test Data Builders
//!
//! Builder patterns for constructing documents with sensible defaults, so a
//! test names only the fields it cares about.

use domain_proposal::{Applicant, Fee, ParticipantBase, Proposal, Quotation, VehicleOwner};

use crate::fixtures::{StringFixtures, TemporalFixtures};

/// Builder for quotation documents
pub struct QuotationBuilder {
    quotation: Quotation,
}

impl Default for QuotationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotationBuilder {
    /// Creates a builder with the standard fixture identity and window.
    pub fn new() -> Self {
        Self {
            quotation: Quotation {
                quotation_no: Some(StringFixtures::quotation_no().into()),
                proposal_no: Some(StringFixtures::proposal_no().into()),
                policy_no: Some(StringFixtures::policy_no().into()),
                policy_start_dt: Some(TemporalFixtures::policy_start()),
                policy_end_dt: Some(TemporalFixtures::policy_end()),
                quotation_status_cd: Some("02".into()),
                is_valid: Some(1),
                ..Default::default()
            },
        }
    }

    /// Starts from an entirely empty document.
    pub fn empty() -> Self {
        Self {
            quotation: Quotation::default(),
        }
    }

    pub fn with_proposal_no(mut self, no: impl Into<String>) -> Self {
        self.quotation.proposal_no = Some(no.into());
        self
    }

    pub fn with_record_holder_name(mut self, name: impl Into<String>) -> Self {
        self.quotation.record_holder_name = Some(name.into());
        self
    }

    pub fn with_agent_name(mut self, name: impl Into<String>) -> Self {
        self.quotation.agent_name = Some(name.into());
        self
    }

    pub fn with_handler_name(mut self, name: impl Into<String>) -> Self {
        self.quotation.handler_name = Some(name.into());
        self
    }

    pub fn with_vehicle_owner(mut self, owner: VehicleOwner) -> Self {
        self.quotation.vehicle_owner = Some(owner);
        self
    }

    pub fn with_fee(mut self, fee: Fee) -> Self {
        self.quotation.fee = Some(fee);
        self
    }

    pub fn with_applicant_name(mut self, name: impl Into<String>) -> Self {
        self.quotation.applicant_list = Some(vec![Applicant {
            base: ParticipantBase {
                participant_name: Some(name.into()),
                cert_no: Some(StringFixtures::cert_no().into()),
                ..Default::default()
            },
            ..Default::default()
        }]);
        self
    }

    /// Arbitrary mutation escape hatch for fields without a setter.
    pub fn map(mut self, f: impl FnOnce(&mut Quotation)) -> Self {
        f(&mut self.quotation);
        self
    }

    pub fn build(self) -> Quotation {
        self.quotation
    }
}

/// Builder for proposal documents
pub struct ProposalBuilder {
    proposal: Proposal,
}

impl Default for ProposalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProposalBuilder {
    /// Creates a builder around the standard quotation fixture.
    pub fn new() -> Self {
        Self {
            proposal: Proposal {
                quotation: QuotationBuilder::new().build(),
                proposal_status_cd: Some("04".into()),
                ..Default::default()
            },
        }
    }

    pub fn with_quotation(mut self, quotation: Quotation) -> Self {
        self.proposal.quotation = quotation;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.proposal.proposal_status_cd = Some(status.into());
        self
    }

    /// Arbitrary mutation escape hatch for fields without a setter.
    pub fn map(mut self, f: impl FnOnce(&mut Proposal)) -> Self {
        f(&mut self.proposal);
        self
    }

    pub fn build(self) -> Proposal {
        self.proposal
    }
}
