//! Session lifecycle subsystem.
//!
//! Centralizes the client's belief about the authenticated identity: the
//! in-memory fields, their persistence under fixed storage keys, and the
//! expiry sweep that runs on every navigation and outbound request. No
//! other module touches the durable session keys.

/// Session store implementation and persisted key names.
pub mod store;

pub use store::{KEY_EXPIRY, KEY_TOKEN, KEY_USER, SessionStore};
