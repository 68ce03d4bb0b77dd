//! Wire types for the ticketing service API.
//!
//! This crate contains the serde-serializable types used for communication
//! with the remote reservation service over JSON - the shapes of data as
//! they appear on the wire.
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with the service: Field names match the remote JSON exactly
//! * Stable: Changes only when the wire contract changes
//!
//! Higher-level client operations are built on top of these types in
//! `tix-client`.

pub mod identity;
pub mod requests;
pub mod responses;
pub mod types;

pub use identity::*;
pub use requests::*;
pub use responses::*;
pub use types::*;
