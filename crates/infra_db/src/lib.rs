//! Proposal Read Infrastructure
//!
//! Read-side database layer for the proposal projection: flat relational
//! records fetched from PostgreSQL via SQLx, and the adapter that assembles
//! them into the nested documents of `domain_proposal`.
//!
//! The layering is one-way. Repositories return raw [`records`], the
//! [`adapters`] turn record pairs into documents, and nothing here writes
//! back — the projection treats the store as a read source.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool_from_url, ProposalReadRepository};
//!
//! let pool = create_pool_from_url("postgres://localhost/proposal").await?;
//! let repo = ProposalReadRepository::new(pool);
//! let document = repo.find_proposal_document("P202400001").await?;
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod records;
pub mod repositories;

pub use adapters::{assemble_proposal, assemble_quotation};
pub use error::{AssemblyError, DatabaseError, LoadError};
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use records::{ProposalRecord, ProposalRelationRecord};
pub use repositories::{ProposalDocumentSource, ProposalReadRepository};
