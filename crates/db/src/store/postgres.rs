use async_trait::async_trait;
use contacts_core::types::DbId;

use super::{ContactStore, StoreError};
use crate::models::contact::{Contact, NewContact, UpdateContact};
use crate::repositories::ContactRepo;
use crate::DbPool;

/// [`ContactStore`] backed by the `contacts` table.
#[derive(Debug, Clone)]
pub struct PgContactStore {
    pool: DbPool,
}

impl PgContactStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn list_by_owner(&self, owner_id: DbId) -> Result<Vec<Contact>, StoreError> {
        Ok(ContactRepo::list_by_owner(&self.pool, owner_id).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Contact>, StoreError> {
        Ok(ContactRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, owner_id: DbId, input: &NewContact) -> Result<Contact, StoreError> {
        Ok(ContactRepo::create(&self.pool, owner_id, input).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, StoreError> {
        Ok(ContactRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ContactRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
