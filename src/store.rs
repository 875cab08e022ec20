//! Persistence collaborator trait.
//!
//! The pipeline never talks to a concrete database. It is handed something
//! implementing [`TransactionStore`] and addresses records by [`Kind`]:
//! a two-collection backend maps the kind to a collection name, a
//! single-collection backend maps it to a `type` discriminator filter.
//! Both satisfy the same contract.

use async_trait::async_trait;

use crate::error::Result;
use crate::schema::{Kind, RawDocument, WritePayload};

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Fetch all raw documents of one kind belonging to `owner_id`.
    ///
    /// No ordering is required; ordering is the presentation pipeline's
    /// job. Timeouts and cancellation are the implementation's concern.
    async fn fetch(&self, kind: Kind, owner_id: &str) -> Result<Vec<RawDocument>>;

    /// Persist a new record and return its assigned identifier. The store
    /// assigns `createdAt`.
    async fn create(&self, kind: Kind, owner_id: &str, payload: &WritePayload) -> Result<String>;

    /// Overwrite the mutable fields of an existing record. The store bumps
    /// `updatedAt`. `kind` only routes to the right collection; an update
    /// never moves a record between kinds.
    async fn update(&self, kind: Kind, id: &str, payload: &WritePayload) -> Result<()>;
}
