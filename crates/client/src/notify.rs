//! Transient user notifications (toasts).
//!
//! Process-wide single-toast channel: showing a new message pre-empts
//! whatever is displayed and replaces the one pending auto-hide timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::util::lock_unpoisoned;

/// Default auto-hide delay, in milliseconds.
pub const DEFAULT_TOAST_MS: u64 = 4000;

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
	#[default]
	Info,
	Error,
	Success,
}

/// A transient message together with its visibility flag. The record
/// outlives its visibility so the UI can fade it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub text: String,
	pub severity: Severity,
	pub visible: bool,
}

#[derive(Default)]
struct NotifierState {
	toast: Option<Toast>,
	/// Bumped on every `show`; a stale hide timer that fires late sees a
	/// newer epoch and leaves the current toast alone.
	epoch: u64,
	hide_task: Option<JoinHandle<()>>,
}

/// Single-instance transient-message channel.
///
/// Cloning shares the underlying state; at most one scheduled hide timer
/// exists per process. `show` must run inside a tokio runtime, which is
/// where every pipeline and guard consumer already lives.
#[derive(Clone, Default)]
pub struct ToastNotifier {
	state: Arc<Mutex<NotifierState>>,
}

impl ToastNotifier {
	pub fn new() -> Self {
		Self::default()
	}

	/// Shows a toast with the default auto-hide delay.
	pub fn show(&self, text: impl Into<String>, severity: Severity) {
		self.show_for(text, severity, Duration::from_millis(DEFAULT_TOAST_MS));
	}

	/// Shows a toast, pre-empting any current one: the pending hide timer
	/// is cancelled and a fresh one is scheduled for `duration`.
	pub fn show_for(&self, text: impl Into<String>, severity: Severity, duration: Duration) {
		let mut state = lock_unpoisoned(&self.state);
		if let Some(task) = state.hide_task.take() {
			task.abort();
		}
		state.epoch += 1;
		let epoch = state.epoch;
		state.toast = Some(Toast {
			text: text.into(),
			severity,
			visible: true,
		});

		let shared = Arc::clone(&self.state);
		state.hide_task = Some(tokio::spawn(async move {
			tokio::time::sleep(duration).await;
			let mut state = lock_unpoisoned(&shared);
			if state.epoch != epoch {
				return;
			}
			if let Some(toast) = state.toast.as_mut() {
				toast.visible = false;
			}
			state.hide_task = None;
		}));
	}

	/// Hides the current toast immediately and cancels the pending timer.
	pub fn hide(&self) {
		let mut state = lock_unpoisoned(&self.state);
		if let Some(task) = state.hide_task.take() {
			task.abort();
		}
		if let Some(toast) = state.toast.as_mut() {
			toast.visible = false;
		}
	}

	/// Returns the current toast record, visible or not.
	pub fn current(&self) -> Option<Toast> {
		lock_unpoisoned(&self.state).toast.clone()
	}
}
