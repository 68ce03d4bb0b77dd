//! Error taxonomy for the coordination core.
//!
//! Nothing here is fatal to the process: authorization failures are
//! recovered by re-authentication, everything else is surfaced to the
//! caller untouched for it to retry or report.

use std::time::Duration;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes produced by the client core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The service rejected the presented credential. When a credential was
	/// believed valid, the pipeline has already run recovery (logout, toast,
	/// login prompt) before this surfaces.
	#[error("unauthorized: {0}")]
	Unauthorized(String),

	/// The round trip exceeded the fixed pipeline timeout.
	#[error("request timed out after {0:?}")]
	Timeout(Duration),

	/// Transport-level failure before a response was received.
	#[error("network error: {0}")]
	Network(String),

	/// Non-auth service failure (validation, seat conflict, server error),
	/// passed through without pipeline-level handling.
	#[error("service error ({status}): {message}")]
	Remote { status: u16, message: String },

	/// The response body did not match the expected wire shape.
	#[error("malformed response: {0}")]
	Decode(String),

	/// Durable client-local storage could not be read or written.
	#[error("storage error: {0}")]
	Storage(String),
}
