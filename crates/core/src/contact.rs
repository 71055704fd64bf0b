//! Contact validation and ownership rules.
//!
//! The messages here are part of the public API: clients match on them, so
//! they are fixed strings rather than formatted per request.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `NotFound` errors.
pub const ENTITY: &str = "Contact";

/// Returned when a create request is missing any required field.
pub const MSG_FIELDS_MANDATORY: &str = "All fields are mandatory";

/// Returned when a caller tries to mutate a contact they do not own.
pub const MSG_NOT_OWNER: &str = "User don't have permission to update other user contacts";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Required fields of a new contact, borrowed from the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

/// Check that `name`, `email` and `phone` are all present and non-empty.
///
/// Only presence is checked. Whitespace-only values are accepted, as are
/// malformed emails and phone numbers.
pub fn require_fields<'a>(
    name: Option<&'a str>,
    email: Option<&'a str>,
    phone: Option<&'a str>,
) -> Result<RequiredFields<'a>, CoreError> {
    match (non_empty(name), non_empty(email), non_empty(phone)) {
        (Some(name), Some(email), Some(phone)) => Ok(RequiredFields { name, email, phone }),
        _ => Err(CoreError::Validation(MSG_FIELDS_MANDATORY.into())),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

/// Ensure `caller` owns the contact whose owner is `owner_id`.
///
/// Applied before every update and delete. Reads are not owner-checked.
pub fn ensure_owner(owner_id: DbId, caller: DbId) -> Result<(), CoreError> {
    if owner_id == caller {
        Ok(())
    } else {
        Err(CoreError::Forbidden(MSG_NOT_OWNER.into()))
    }
}

/// The error reported for an absent contact, a malformed identifier, or a
/// lookup that timed out.
pub fn not_found() -> CoreError {
    CoreError::NotFound { entity: ENTITY }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
