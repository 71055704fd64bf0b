//! The contact store abstraction.
//!
//! Handlers talk to a [`ContactStore`] trait object so the persistence backend
//! can be chosen at startup:
//!
//! - [`PgContactStore`] -- Postgres via `sqlx`.
//! - [`MemoryContactStore`] -- an in-process map, for local runs and tests.

use async_trait::async_trait;
use contacts_core::types::DbId;

use crate::models::contact::{Contact, NewContact, UpdateContact};

pub mod memory;
pub mod postgres;

pub use memory::MemoryContactStore;
pub use postgres::PgContactStore;

/// Errors raised by a contact store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations for contacts.
///
/// Each call is atomic on its own. Nothing spans calls: a read followed by a
/// write may observe a concurrent writer in between.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static {
    /// All contacts owned by `owner_id`.
    async fn list_by_owner(&self, owner_id: DbId) -> Result<Vec<Contact>, StoreError>;

    /// The contact with `id`, if any.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Contact>, StoreError>;

    /// Persist a new contact owned by `owner_id`. The store assigns the id.
    async fn create(&self, owner_id: DbId, input: &NewContact) -> Result<Contact, StoreError>;

    /// Apply the supplied fields to the contact with `id`.
    ///
    /// Returns the updated contact, or `None` if it no longer exists.
    async fn update(&self, id: DbId, input: &UpdateContact)
        -> Result<Option<Contact>, StoreError>;

    /// Remove the contact with `id`. Returns `true` if something was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
