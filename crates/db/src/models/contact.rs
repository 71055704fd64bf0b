//! Contact entity model and DTOs.

use contacts_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a contact.
///
/// Every field is optional on the wire so a missing field surfaces as a
/// validation error instead of a JSON rejection. Ownership is never taken
/// from the body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A validated contact ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Request body for updating a contact. Only supplied fields change.
///
/// Has no `owner_id` field: a body carrying one is ignored and cannot
/// reassign the contact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
