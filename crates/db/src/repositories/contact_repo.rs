//! Repository for the `contacts` table.

use contacts_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, NewContact, UpdateContact};

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, name, email, phone, owner_id, created_at, updated_at";

/// Provides CRUD operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact owned by `owner_id`, returning the full row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &NewContact,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone, owner_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every contact owned by `owner_id`, in insertion order.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Contact>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the supplied fields to a contact. Returns `None` if no row has `id`.
    ///
    /// Uses `COALESCE` so only provided fields are changed. `owner_id` is
    /// never written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                phone = COALESCE($4, phone), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
