//! Proposal read repository
//!
//! Read-only access to the proposal store. The projection layer never
//! writes: rows are fetched, assembled into documents, and handed out.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use domain_proposal::{Proposal, Quotation};

use crate::adapters::{assemble_proposal, assemble_quotation};
use crate::error::{DatabaseError, LoadError};
use crate::records::{ProposalRecord, ProposalRelationRecord};

/// Repository over the wide proposal row and its companion relation row.
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::ProposalReadRepository;
///
/// let repo = ProposalReadRepository::new(pool);
/// let document = repo.find_proposal_document("P202400001").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProposalReadRepository {
    pool: PgPool,
}

impl ProposalReadRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches the live wide row for a proposal number, if one exists.
    #[instrument(skip(self))]
    pub async fn find_by_proposal_no(
        &self,
        proposal_no: &str,
    ) -> Result<Option<ProposalRecord>, DatabaseError> {
        debug!("fetching proposal row");

        let record = sqlx::query_as::<_, ProposalRecord>(
            r#"
            SELECT *
            FROM proposal
            WHERE proposal_no = $1
              AND is_valid = 1
            "#,
        )
        .bind(proposal_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Fetches the live wide row, erroring when the proposal does not exist.
    pub async fn get_by_proposal_no(
        &self,
        proposal_no: &str,
    ) -> Result<ProposalRecord, DatabaseError> {
        self.find_by_proposal_no(proposal_no)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Proposal", proposal_no))
    }

    /// Fetches the companion relation row for a proposal number, if present.
    ///
    /// A proposal may legitimately have no relation row; that is not an
    /// error, the nested sections are simply unpopulated.
    #[instrument(skip(self))]
    pub async fn find_relation_by_proposal_no(
        &self,
        proposal_no: &str,
    ) -> Result<Option<ProposalRelationRecord>, DatabaseError> {
        debug!("fetching proposal relation row");

        let record = sqlx::query_as::<_, ProposalRelationRecord>(
            r#"
            SELECT *
            FROM proposal_relation
            WHERE proposal_no = $1
              AND is_valid = 1
            "#,
        )
        .bind(proposal_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Fetches and assembles the full [`Proposal`] document.
    ///
    /// Returns `Ok(None)` when no proposal row exists; a present row that
    /// fails assembly is an error, never a silently partial document.
    #[instrument(skip(self))]
    pub async fn find_proposal_document(
        &self,
        proposal_no: &str,
    ) -> Result<Option<Proposal>, LoadError> {
        let Some(record) = self.find_by_proposal_no(proposal_no).await? else {
            return Ok(None);
        };
        let relation = self.find_relation_by_proposal_no(proposal_no).await?;

        let document = assemble_proposal(&record, relation.as_ref())?;
        Ok(Some(document))
    }

    /// Fetches and assembles the [`Quotation`] view of a proposal.
    #[instrument(skip(self))]
    pub async fn find_quotation_document(
        &self,
        proposal_no: &str,
    ) -> Result<Option<Quotation>, LoadError> {
        let Some(record) = self.find_by_proposal_no(proposal_no).await? else {
            return Ok(None);
        };
        let relation = self.find_relation_by_proposal_no(proposal_no).await?;

        let document = assemble_quotation(&record, relation.as_ref())?;
        Ok(Some(document))
    }
}

/// Read seam for projection callers.
///
/// Lets callers take any document source, so tests can substitute an
/// in-memory implementation for the Postgres-backed repository.
#[async_trait]
pub trait ProposalDocumentSource: Send + Sync {
    /// Loads the full [`Proposal`] document for a proposal number.
    async fn load_proposal(&self, proposal_no: &str) -> Result<Option<Proposal>, LoadError>;

    /// Loads the [`Quotation`] view for a proposal number.
    async fn load_quotation(&self, proposal_no: &str) -> Result<Option<Quotation>, LoadError>;
}

#[async_trait]
impl ProposalDocumentSource for ProposalReadRepository {
    async fn load_proposal(&self, proposal_no: &str) -> Result<Option<Proposal>, LoadError> {
        self.find_proposal_document(proposal_no).await
    }

    async fn load_quotation(&self, proposal_no: &str) -> Result<Option<Quotation>, LoadError> {
        self.find_quotation_document(proposal_no).await
    }
}
