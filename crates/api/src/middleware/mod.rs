//! Request extractors that resolve the caller.
//!
//! - [`auth::AuthUser`] -- the user id carried by the request's bearer token.

pub mod auth;
