//! In-process contact store.
//!
//! Keeps contacts in a `BTreeMap` behind a `tokio::sync::RwLock`. Ids are
//! assigned from a monotonically increasing counter and never reused, so a
//! deleted contact's id stays absent for good.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use contacts_core::types::DbId;
use tokio::sync::RwLock;

use super::{ContactStore, StoreError};
use crate::models::contact::{Contact, NewContact, UpdateContact};

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    contacts: BTreeMap<DbId, Contact>,
}

/// [`ContactStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    inner: RwLock<Inner>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts across all owners.
    pub async fn len(&self) -> usize {
        self.inner.read().await.contacts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn list_by_owner(&self, owner_id: DbId) -> Result<Vec<Contact>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .contacts
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Contact>, StoreError> {
        Ok(self.inner.read().await.contacts.get(&id).cloned())
    }

    async fn create(&self, owner_id: DbId, input: &NewContact) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let contact = Contact {
            id: inner.last_id,
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            owner_id,
            created_at: now,
            updated_at: now,
        };
        inner.contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(contact) = inner.contacts.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            contact.name.clone_from(name);
        }
        if let Some(email) = &input.email {
            contact.email.clone_from(email);
        }
        if let Some(phone) = &input.phone {
            contact.phone.clone_from(phone);
        }
        contact.updated_at = Utc::now();
        Ok(Some(contact.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.contacts.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
