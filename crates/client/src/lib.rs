//! Session and reservation coordination core for the ticketing client.
//!
//! This crate owns the part of the client that must stay correct when the
//! network misbehaves or a session expires mid-flow:
//!
//! * [`SessionStore`]: persisted identity/credential/expiry with a cheap
//!   expiry sweep and global invalidation
//! * [`RequestPipeline`]: outbound HTTP with credential injection,
//!   failure classification, and coordinated 401 recovery
//! * [`ReservationClient`]: typed lock/extend/book/payment operations
//! * [`ToastNotifier`]: single-slot transient user notifications
//! * [`NavigationGuard`]: synchronous role gate for view transitions
//!
//! Rendering, routing tables, and the remote service itself are external
//! collaborators. Build the per-process service set through [`Client`],
//! which wires the dependencies in one place instead of leaning on
//! module-level globals.

/// Fixed configuration: base URL, timeout, session lifetime.
pub mod config;
/// Error taxonomy shared across the crate.
pub mod error;
/// Outbound request pipeline and interceptors.
pub mod http;
/// Role-gated navigation decisions.
pub mod nav;
/// Transient user notifications.
pub mod notify;
/// Typed reservation operations.
pub mod reservations;
/// Session lifecycle subsystem.
pub mod session;
/// Durable client-local key-value storage.
pub mod storage;

mod util;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{AuthInterceptor, Flow, Interceptor, RecoveryInterceptor, RequestPipeline, SESSION_EXPIRED_MESSAGE};
pub use nav::{ACCESS_DENIED_MESSAGE, NavDecision, NavigationGuard, RouteTarget};
pub use notify::{Severity, Toast, ToastNotifier};
pub use reservations::ReservationClient;
pub use session::SessionStore;
pub use storage::{FileStorage, MemoryStorage, Storage};

/// Re-export of the wire types crate.
pub use tix_protocol as protocol;

use std::sync::Arc;

/// Per-process service bundle.
///
/// Creates exactly one session store, notifier, pipeline, and reservation
/// client, wired together the only way they compose: the pipeline reads
/// the store and drives recovery through the notifier, the guard and the
/// reservation client sit on top. Restores any persisted session as part
/// of construction.
pub struct Client {
	session: Arc<SessionStore>,
	notifier: ToastNotifier,
	pipeline: Arc<RequestPipeline>,
	reservations: ReservationClient,
	guard: NavigationGuard,
}

impl Client {
	/// Builds the service set over the given storage backend and restores
	/// any persisted session.
	pub fn new(config: ClientConfig, storage: Arc<dyn Storage>) -> Result<Self> {
		let session = Arc::new(SessionStore::new(storage, config.session_ttl));
		session.init();

		let notifier = ToastNotifier::new();
		let interceptors: Vec<Arc<dyn Interceptor>> = vec![
			Arc::new(AuthInterceptor::new(Arc::clone(&session))),
			Arc::new(RecoveryInterceptor::new(Arc::clone(&session), notifier.clone())),
		];
		let pipeline = Arc::new(RequestPipeline::new(&config, interceptors)?);

		Ok(Self {
			reservations: ReservationClient::new(Arc::clone(&pipeline)),
			guard: NavigationGuard::new(Arc::clone(&session), notifier.clone()),
			session,
			notifier,
			pipeline,
		})
	}

	/// The process-wide session store.
	pub fn session(&self) -> &Arc<SessionStore> {
		&self.session
	}

	/// The process-wide toast channel.
	pub fn notifier(&self) -> &ToastNotifier {
		&self.notifier
	}

	/// The underlying request pipeline, for callers issuing bespoke
	/// requests outside the reservation façade.
	pub fn pipeline(&self) -> &Arc<RequestPipeline> {
		&self.pipeline
	}

	/// Typed reservation operations.
	pub fn reservations(&self) -> &ReservationClient {
		&self.reservations
	}

	/// The navigation gate.
	pub fn guard(&self) -> &NavigationGuard {
		&self.guard
	}
}
