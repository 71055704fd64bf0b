//! Handlers for the `/contacts` resource.
//!
//! Every endpoint requires authentication and is scoped to the caller.
//! Single-contact endpoints look the contact up through
//! [`race_lookup`], so a slow store surfaces as "Contact not found" after
//! the configured lookup timeout. Update and delete additionally require the
//! caller to own the contact; read does not.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use contacts_core::contact;
use contacts_core::lookup::{race_lookup, LookupError};
use contacts_core::types::DbId;
use contacts_db::models::contact::{Contact, CreateContact, NewContact, UpdateContact};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Resolve `raw_id` to a contact within the configured lookup timeout.
///
/// A malformed id, a missing row and a timeout all yield the same
/// `NotFound`. Store failures propagate as server errors.
async fn fetch_contact(state: &AppState, raw_id: &str) -> AppResult<Contact> {
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::Core(contact::not_found()))?;

    let store = Arc::clone(&state.store);
    let timeout = state.config.lookup_timeout;

    match race_lookup(async move { store.find_by_id(id).await }, timeout).await {
        Ok(Some(found)) => Ok(found),
        Ok(None) => Err(AppError::Core(contact::not_found())),
        Err(LookupError::TimedOut(after)) => {
            tracing::warn!(
                contact_id = id,
                timeout_ms = after.as_millis() as u64,
                "Contact lookup timed out",
            );
            Err(AppError::Core(contact::not_found()))
        }
        Err(LookupError::Store(err)) => Err(err.into()),
        Err(LookupError::Join(msg)) => Err(AppError::InternalError(msg)),
    }
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// Decode a JSON request body, treating an absent or blank body as `T::default()`.
///
/// The content type is not checked. A body that is present but not valid JSON
/// for `T` is a `BadRequest`.
fn parse_body<T>(body: &Bytes) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

// ---------------------------------------------------------------------------
// GET /contacts
// ---------------------------------------------------------------------------

/// List all contacts owned by the caller.
pub async fn list_contacts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let contacts = state.store.list_by_owner(auth.user_id).await?;
    Ok(Json(contacts))
}

// ---------------------------------------------------------------------------
// POST /contacts
// ---------------------------------------------------------------------------

/// Create a contact owned by the caller.
pub async fn create_contact(
    auth: AuthUser,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input: CreateContact = parse_body(&body)?;

    tracing::debug!(
        user_id = auth.user_id,
        has_name = input.name.is_some(),
        has_email = input.email.is_some(),
        has_phone = input.phone.is_some(),
        "Create contact request",
    );

    let fields = contact::require_fields(
        input.name.as_deref(),
        input.email.as_deref(),
        input.phone.as_deref(),
    )?;

    let new_contact = NewContact {
        name: fields.name.to_string(),
        email: fields.email.to_string(),
        phone: fields.phone.to_string(),
    };

    let created = state.store.create(auth.user_id, &new_contact).await?;

    tracing::info!(
        contact_id = created.id,
        user_id = auth.user_id,
        "Contact created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /contacts/{id}
// ---------------------------------------------------------------------------

/// Get a single contact by ID.
///
/// Any authenticated user who knows the id can read the contact.
pub async fn get_contact(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let found = fetch_contact(&state, &id).await?;
    Ok(Json(found))
}

// ---------------------------------------------------------------------------
// PUT /contacts/{id}
// ---------------------------------------------------------------------------

/// Update the supplied fields of a contact the caller owns.
///
/// The body is only decoded after the lookup and ownership check, so an
/// unknown id is a 404 whatever the body holds. An empty body applies no
/// changes. The write is keyed on the id alone.
pub async fn update_contact(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let existing = fetch_contact(&state, &id).await?;
    contact::ensure_owner(existing.owner_id, auth.user_id)?;
    let input: UpdateContact = parse_body(&body)?;

    let updated = state
        .store
        .update(existing.id, &input)
        .await?
        .ok_or_else(|| AppError::Core(contact::not_found()))?;

    tracing::info!(
        contact_id = updated.id,
        user_id = auth.user_id,
        "Contact updated",
    );

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /contacts/{id}
// ---------------------------------------------------------------------------

/// Delete a contact the caller owns, returning its last state.
pub async fn delete_contact(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let existing = fetch_contact(&state, &id).await?;
    contact::ensure_owner(existing.owner_id, auth.user_id)?;

    let removed = state.store.delete(existing.id).await?;
    if !removed {
        tracing::debug!(
            contact_id = existing.id,
            "Contact already gone at delete time",
        );
    }

    tracing::info!(
        contact_id = existing.id,
        user_id = auth.user_id,
        "Contact deleted",
    );

    Ok(Json(existing))
}
