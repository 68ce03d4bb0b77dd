//! Durable client-local key-value storage.
//!
//! The session store persists its fields under fixed string keys, the way a
//! browser client would use `localStorage`. Embedders pick an
//! implementation: [`FileStorage`] for a single JSON file on disk, or
//! [`MemoryStorage`] when persistence is handled elsewhere (and in tests).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::util::lock_unpoisoned;

/// String-keyed durable storage for session fields.
///
/// Implementations must tolerate removal of absent keys; `get` on an absent
/// key is simply `None`.
pub trait Storage: Send + Sync {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str) -> Result<()>;
	fn remove(&self, key: &str) -> Result<()>;
}

/// Storage backed by a single JSON object file, loaded once and rewritten
/// whole on every mutation. A missing or unreadable file is treated as
/// empty rather than an error.
pub struct FileStorage {
	path: PathBuf,
	entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
	/// Opens (or lazily creates) the storage file at `path`.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let entries = fs::read_to_string(&path)
			.ok()
			.and_then(|content| serde_json::from_str(&content).ok())
			.unwrap_or_default();
		Self {
			path,
			entries: Mutex::new(entries),
		}
	}

	/// Returns the backing file path.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() && !parent.exists() {
				fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
			}
		}
		let json = serde_json::to_string_pretty(entries).map_err(|e| Error::Storage(e.to_string()))?;
		fs::write(&self.path, json).map_err(|e| Error::Storage(e.to_string()))
	}
}

impl Storage for FileStorage {
	fn get(&self, key: &str) -> Option<String> {
		lock_unpoisoned(&self.entries).get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		let mut entries = lock_unpoisoned(&self.entries);
		entries.insert(key.to_string(), value.to_string());
		self.flush(&entries)
	}

	fn remove(&self, key: &str) -> Result<()> {
		let mut entries = lock_unpoisoned(&self.entries);
		if entries.remove(key).is_none() {
			return Ok(());
		}
		self.flush(&entries)
	}
}

/// In-process storage with no durability. Useful for tests and for
/// embedders that bring their own persistence layer.
#[derive(Default)]
pub struct MemoryStorage {
	entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Storage for MemoryStorage {
	fn get(&self, key: &str) -> Option<String> {
		lock_unpoisoned(&self.entries).get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		lock_unpoisoned(&self.entries).insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<()> {
		lock_unpoisoned(&self.entries).remove(key);
		Ok(())
	}
}
