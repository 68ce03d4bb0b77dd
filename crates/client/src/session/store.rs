//! The session store: single authority over identity, credential, expiry.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info, warn};

use tix_protocol::Identity;

use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::util::{lock_unpoisoned, now_ms};

/// Storage key holding the serialized identity.
pub const KEY_USER: &str = "user";
/// Storage key holding the opaque bearer credential.
pub const KEY_TOKEN: &str = "token";
/// Storage key holding the expiry timestamp, epoch milliseconds as a string.
pub const KEY_EXPIRY: &str = "auth_expiry";

#[derive(Debug, Default)]
struct SessionFields {
	identity: Option<Identity>,
	credential: Option<String>,
	expiry_ms: Option<u64>,
	modal_open: bool,
}

/// Owns the client-side session. Identity and credential are always both
/// present or both absent; expiry is set exactly when the credential is set
/// and cleared together with it.
///
/// This is the only writer of the durable session keys. All consumers (the
/// request pipeline, the navigation guard, the reservation client) share
/// one instance per process.
pub struct SessionStore {
	storage: Arc<dyn Storage>,
	ttl: Duration,
	fields: Mutex<SessionFields>,
}

impl SessionStore {
	/// Creates an anonymous store over the given storage backend. Call
	/// [`init`](Self::init) afterwards to restore a persisted session.
	pub fn new(storage: Arc<dyn Storage>, ttl: Duration) -> Self {
		Self {
			storage,
			ttl,
			fields: Mutex::new(SessionFields::default()),
		}
	}

	/// Restores a persisted session at process start.
	///
	/// Hydrates in-memory state only when both `user` and `token` are
	/// stored and the recorded expiry has not elapsed; anything else purges
	/// the persisted fields and leaves the session anonymous.
	pub fn init(&self) {
		let stored_user = self.storage.get(KEY_USER);
		let stored_token = self.storage.get(KEY_TOKEN);
		let (Some(user_json), Some(token)) = (stored_user, stored_token) else {
			// A lone leftover key is still "no session"; sweep it away.
			let mut fields = lock_unpoisoned(&self.fields);
			self.clear_locked(&mut fields);
			return;
		};

		let identity = match serde_json::from_str::<Identity>(&user_json) {
			Ok(identity) => identity,
			Err(err) => {
				warn!(target = "tix.session", error = %err, "persisted identity unreadable; purging session");
				let mut fields = lock_unpoisoned(&self.fields);
				self.clear_locked(&mut fields);
				return;
			}
		};
		let expiry_ms = self
			.storage
			.get(KEY_EXPIRY)
			.and_then(|raw| raw.parse::<u64>().ok());

		{
			let mut fields = lock_unpoisoned(&self.fields);
			fields.identity = Some(identity);
			fields.credential = Some(token);
			fields.expiry_ms = expiry_ms;
		}

		if self.check_session() {
			debug!(target = "tix.session", "persisted session hydrated");
		}
	}

	/// Runs the expiry sweep: returns false and logs the session out when no
	/// expiry is recorded or the current time has passed it. Cheap and
	/// idempotent; called on every navigation and before every outbound
	/// request.
	pub fn check_session(&self) -> bool {
		let mut fields = lock_unpoisoned(&self.fields);
		match fields.expiry_ms {
			Some(expiry) if now_ms() < expiry => true,
			Some(_) => {
				info!(target = "tix.session", "session expired; logging out");
				self.clear_locked(&mut fields);
				false
			}
			None => {
				self.clear_locked(&mut fields);
				false
			}
		}
	}

	/// Establishes a session from a successful login response, replacing any
	/// prior session unconditionally. Persists identity, credential, and a
	/// fresh expiry, and closes the login prompt.
	pub fn login(&self, identity: Identity, credential: impl Into<String>) -> Result<()> {
		let credential = credential.into();
		let expiry_ms = now_ms() + self.ttl.as_millis() as u64;
		let user_json = serde_json::to_string(&identity).map_err(|e| Error::Storage(e.to_string()))?;

		let mut fields = lock_unpoisoned(&self.fields);
		self.storage.set(KEY_USER, &user_json)?;
		self.storage.set(KEY_TOKEN, &credential)?;
		self.storage.set(KEY_EXPIRY, &expiry_ms.to_string())?;

		info!(target = "tix.session", user = %identity.id, "session established");
		fields.identity = Some(identity);
		fields.credential = Some(credential);
		fields.expiry_ms = Some(expiry_ms);
		fields.modal_open = false;
		Ok(())
	}

	/// Clears the session in memory and in durable storage. Safe to call
	/// when already logged out.
	pub fn logout(&self) {
		let mut fields = lock_unpoisoned(&self.fields);
		if self.clear_locked(&mut fields) {
			info!(target = "tix.session", "session cleared");
		}
	}

	/// Clears the session and reports whether a credential had been
	/// recorded. The check and the clear happen under one lock so that
	/// concurrent authorization failures trigger recovery at most once.
	pub(crate) fn revoke(&self) -> bool {
		let mut fields = lock_unpoisoned(&self.fields);
		self.clear_locked(&mut fields)
	}

	/// Opens the login prompt. UI flag only; nothing is persisted.
	pub fn open_login_modal(&self) {
		lock_unpoisoned(&self.fields).modal_open = true;
	}

	/// Closes the login prompt.
	pub fn close_login_modal(&self) {
		lock_unpoisoned(&self.fields).modal_open = false;
	}

	/// Returns whether the login prompt is currently open.
	pub fn modal_open(&self) -> bool {
		lock_unpoisoned(&self.fields).modal_open
	}

	/// Returns the current identity, if logged in.
	pub fn identity(&self) -> Option<Identity> {
		lock_unpoisoned(&self.fields).identity.clone()
	}

	/// Returns the current credential, if logged in.
	pub fn credential(&self) -> Option<String> {
		lock_unpoisoned(&self.fields).credential.clone()
	}

	/// Clears memory and storage; returns whether a credential was present.
	/// Storage failures are logged, not propagated: logout must always
	/// leave the in-memory session anonymous.
	fn clear_locked(&self, fields: &mut SessionFields) -> bool {
		let had_credential = fields.credential.is_some();
		fields.identity = None;
		fields.credential = None;
		fields.expiry_ms = None;

		for key in [KEY_USER, KEY_TOKEN, KEY_EXPIRY] {
			if let Err(err) = self.storage.remove(key) {
				warn!(target = "tix.session", %key, error = %err, "failed to clear persisted session field");
			}
		}
		had_credential
	}
}
