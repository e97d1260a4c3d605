//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{DomainError, Entity};

/// Keyed persistence for one entity type.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Find all records, ordered by id
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;

    /// Find a record by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError>;

    /// Insert the entity when it has no id, otherwise update the stored row.
    /// Returns the persisted state.
    async fn save(&self, entity: E) -> Result<E, DomainError>;

    /// Delete a record by ID, `DomainError::NotFound` if no row matched
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}
