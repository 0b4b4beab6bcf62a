//! Read-only repositories

pub mod proposal;

pub use proposal::{ProposalDocumentSource, ProposalReadRepository};
