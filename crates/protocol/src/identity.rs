//! Authenticated user identity as reported by the service.

use serde::{Deserialize, Serialize};

/// Access level attached to an identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
	#[default]
	User,
	Admin,
}

impl Role {
	/// Returns true for identities allowed through admin-restricted routes.
	pub fn is_admin(&self) -> bool {
		matches!(self, Role::Admin)
	}
}

/// A logged-in user as returned by the service's auth flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
	pub id: String,
	pub name: String,
	pub email: String,
	#[serde(default)]
	pub picture_url: Option<String>,
	#[serde(default)]
	pub role: Role,
}
