//! Pre-request/post-response interceptors and the built-in auth pair.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::warn;

use crate::notify::{Severity, ToastNotifier};
use crate::session::SessionStore;

/// Toast shown when a believed-valid credential is rejected by the service.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please log in again";

/// Decision returned by each interceptor hook: `Continue` hands off to the
/// next interceptor in order, `Halt` short-circuits the rest of the chain
/// for that phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Halt,
}

/// A pipeline stage. Hooks default to pass-through so implementations
/// override only the phase they care about.
///
/// `before_send` runs on the built request, in registration order, before
/// it leaves the process. `after_receive` runs once a response has
/// arrived; transport failures (network, timeout) never reach it.
#[async_trait]
pub trait Interceptor: Send + Sync {
	fn before_send(&self, _request: &mut reqwest::Request) -> Flow {
		Flow::Continue
	}

	async fn after_receive(&self, _response: &reqwest::Response) -> Flow {
		Flow::Continue
	}
}

/// Outgoing interceptor: runs the local expiry sweep, then attaches the
/// surviving credential as a bearer authorization header. Anonymous
/// requests proceed unmodified.
pub struct AuthInterceptor {
	store: Arc<SessionStore>,
}

impl AuthInterceptor {
	pub fn new(store: Arc<SessionStore>) -> Self {
		Self { store }
	}
}

#[async_trait]
impl Interceptor for AuthInterceptor {
	fn before_send(&self, request: &mut reqwest::Request) -> Flow {
		// The sweep logs an expired session out before it can be sent.
		if self.store.check_session() {
			if let Some(token) = self.store.credential() {
				match HeaderValue::from_str(&format!("Bearer {token}")) {
					Ok(value) => {
						request.headers_mut().insert(AUTHORIZATION, value);
					}
					Err(err) => {
						warn!(target = "tix.http", error = %err, "credential not header-safe; sending anonymously");
					}
				}
			}
		}
		Flow::Continue
	}
}

/// Incoming interceptor: coordinated recovery for authorization failures.
///
/// On a 401 it clears the session, and only when a credential had actually
/// been recorded (at-most-once, checked and cleared under one lock) it
/// surfaces the fixed expiry toast and reopens the login prompt. An
/// anonymous 401, such as a failed login attempt, passes through untouched.
pub struct RecoveryInterceptor {
	store: Arc<SessionStore>,
	notifier: ToastNotifier,
}

impl RecoveryInterceptor {
	pub fn new(store: Arc<SessionStore>, notifier: ToastNotifier) -> Self {
		Self { store, notifier }
	}
}

#[async_trait]
impl Interceptor for RecoveryInterceptor {
	async fn after_receive(&self, response: &reqwest::Response) -> Flow {
		if response.status() != StatusCode::UNAUTHORIZED {
			return Flow::Continue;
		}
		if !self.store.revoke() {
			return Flow::Continue;
		}
		warn!(target = "tix.http", "credential rejected by service; session cleared");
		self.notifier.show(SESSION_EXPIRED_MESSAGE, Severity::Error);
		self.store.open_login_modal();
		Flow::Continue
	}
}
