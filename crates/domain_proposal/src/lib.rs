//! Proposal Document Domain
//!
//! This crate defines the nested document projections of the quoting and
//! underwriting data: the [`Quotation`] aggregate, the [`Proposal`]
//! aggregate that extends it, their participant hierarchy, composite
//! sub-documents, and the leaf value objects they compose.
//!
//! The documents are read-side value objects: a projection path assembles
//! them from relational facts at query time, and no method here mutates
//! persisted state. Three contracts govern the shapes:
//!
//! - **Wire fidelity**: JSON member names match the historical wire shape
//!   byte for byte, including the odd ones (`OAList`, `paymentEndDT`,
//!   `hullMGList`). Logically-boolean flags stay narrow strings (`"0"`/
//!   `"1"`) where the wire has strings and `i32` where the wire has
//!   integers; unifying them would silently change the external contract.
//! - **Temporal codec**: every timestamp travels through
//!   [`core_kernel::temporal`] (`yyyy-MM-dd HH:mm:ss` at UTC+8).
//! - **Masking**: a handful of fields are sensitive; see [`projection`]
//!   for the external-channel redaction boundary.
//!
//! A `None` sub-document means "not applicable to this product line", not
//! "unknown"; consumers must branch on presence before reading nested
//! fields. `Option<Vec<_>>` collections keep the null-vs-empty distinction:
//! `None` is "not populated", `Some(vec![])` is "populated, zero entries".

pub mod coinsurance;
pub mod error;
pub mod fee;
pub mod installment;
pub mod participant;
pub mod projection;
pub mod proposal;
pub mod quotation;
pub mod related;
pub mod subject;
pub mod underwriting;
pub mod vehicle;

pub use coinsurance::{CoGuarantor, CoInsurance};
pub use error::ProjectionError;
pub use fee::Fee;
pub use installment::Installment;
pub use participant::{Applicant, Insured, ParticipantBase};
pub use projection::{external_document, internal_document, sensitive_fields, Document};
pub use proposal::Proposal;
pub use quotation::Quotation;
pub use related::{Debtor, Oa, Partner, RelatedProject};
pub use subject::{HouseHold, ProposalOrganizer, SubjectAddress, SubjectGroup};
pub use underwriting::UnderWriting;
pub use vehicle::{TruckTrancheScore, VehicleInfo, VehicleInsure, VehicleOwner};
pub use vehicle::{Aircraft, Hull};
