//! Domain types and rules for the contacts service.
//!
//! Nothing here touches HTTP or the database: the API and store crates build
//! on these primitives.

pub mod contact;
pub mod error;
pub mod lookup;
pub mod types;
