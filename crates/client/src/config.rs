//! Fixed client configuration: service address, request timeout, session
//! lifetime.

use std::time::Duration;

/// Default base address of the reservation service API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Bound applied to every outbound round trip.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// How long a session stays valid after login.
pub const SESSION_TIMEOUT_SECS: u64 = 3600;

/// Configuration shared by the pipeline and the session store.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Base URL all endpoint paths are appended to.
	pub base_url: String,
	/// Per-request timeout; exceeding it yields a timeout failure, not a hang.
	pub timeout: Duration,
	/// Session duration applied at login.
	pub session_ttl: Duration,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
			session_ttl: Duration::from_secs(SESSION_TIMEOUT_SECS),
		}
	}
}

impl ClientConfig {
	/// Builds a config pointing at the given service base URL.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			..Self::default()
		}
	}

	/// Sets the per-request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Sets the session duration applied at login.
	pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
		self.session_ttl = ttl;
		self
	}
}
