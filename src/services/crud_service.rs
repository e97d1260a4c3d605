//! CRUD Service - generic business façade without HTTP layer

use std::sync::Arc;

use crate::domain::{DomainError, Entity, EntityStore};
use crate::resources::Resource;

/// Delegates to the entity store of `R` and maps results to transport records.
/// Absence is reported as `None`, never as an error.
pub struct CrudService<R: Resource> {
    store: Arc<dyn EntityStore<R::Entity>>,
}

impl<R: Resource> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: Resource> CrudService<R> {
    pub fn new(store: Arc<dyn EntityStore<R::Entity>>) -> Self {
        Self { store }
    }

    /// List all records
    pub async fn find_all(&self) -> Result<Vec<R::Dto>, DomainError> {
        let entities = self.store.find_all().await?;
        Ok(entities.into_iter().map(R::Dto::from).collect())
    }

    /// Get a single record by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<R::Dto>, DomainError> {
        Ok(self.store.find_by_id(id).await?.map(R::Dto::from))
    }

    /// Persist a new record. A client-supplied id is discarded.
    pub async fn save(&self, dto: R::Dto) -> Result<R::Dto, DomainError> {
        let entity = R::Entity::from(dto).into_new();
        let saved = self.store.save(entity).await?;

        tracing::debug!(resource = R::PATH, id = ?saved.id(), "Record created");

        Ok(R::Dto::from(saved))
    }

    /// Overwrite the mutable fields of the record with the given id.
    /// The id in the body is ignored.
    pub async fn update(&self, id: i64, dto: R::Dto) -> Result<Option<R::Dto>, DomainError> {
        let Some(mut existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        existing.apply_changes(R::Entity::from(dto));
        let saved = self.store.save(existing).await?;

        tracing::debug!(resource = R::PATH, id, "Record updated");

        Ok(Some(R::Dto::from(saved)))
    }

    /// Delete the record with the given id
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.store.delete_by_id(id).await?;

        tracing::debug!(resource = R::PATH, id, "Record deleted");

        Ok(())
    }
}
