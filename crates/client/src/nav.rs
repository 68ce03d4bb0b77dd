//! Role-gated navigation decisions.
//!
//! A synchronous gate run before every view transition. It consults only
//! in-memory session state and never blocks on a network call; the
//! routing table itself belongs to the embedding router.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::notify::{Severity, ToastNotifier};
use crate::session::SessionStore;

/// Toast shown when an authenticated non-admin hits an admin route.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied: admins only";

/// The navigation target as described by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
	pub name: String,
	/// Marks routes reserved for the admin role.
	pub admin_only: bool,
}

impl RouteTarget {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			admin_only: false,
		}
	}

	pub fn admin(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			admin_only: true,
		}
	}
}

/// Verdict handed back to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
	/// Proceed to the target route.
	Allow,
	/// Abort and send the user to the home route.
	RedirectHome,
}

/// Gate consulted on every navigation attempt.
pub struct NavigationGuard {
	store: Arc<SessionStore>,
	notifier: ToastNotifier,
}

impl NavigationGuard {
	pub fn new(store: Arc<SessionStore>, notifier: ToastNotifier) -> Self {
		Self { store, notifier }
	}

	/// Runs the expiry sweep, then enforces the admin gate on restricted
	/// routes: anonymous users are redirected silently, authenticated
	/// non-admins get an error toast before the redirect.
	pub fn authorize(&self, target: &RouteTarget) -> NavDecision {
		self.store.check_session();

		if !target.admin_only {
			return NavDecision::Allow;
		}

		let Some(identity) = self.store.identity() else {
			debug!(target = "tix.nav", route = %target.name, "anonymous user on admin route; redirecting");
			return NavDecision::RedirectHome;
		};
		if !identity.role.is_admin() {
			warn!(target = "tix.nav", route = %target.name, user = %identity.id, "admin route denied");
			self.notifier.show(ACCESS_DENIED_MESSAGE, Severity::Error);
			return NavDecision::RedirectHome;
		}
		NavDecision::Allow
	}
}
