//! Response payloads returned by the reservation service.

use serde::{Deserialize, Serialize};

use crate::types::Screening;

/// Response of `POST /screenings/details`: the screening with its merged
/// seat map, plus a trimmed summary of the owning movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreeningDetails {
	pub screening: Screening,
	pub movie: MovieSummary,
}

/// The subset of movie fields the details endpoint repeats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSummary {
	pub id: String,
	pub title: String,
	pub duration_min: u32,
}

/// Outcome of `POST /seats/lock`. `status` reports the seat's state after
/// the call: `"LOCKED"` when a hold was taken, `"AVAILABLE"` when a
/// same-user re-lock released it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockOutcome {
	pub message: String,
	pub status: String,
}

/// Outcome of `POST /seats/extend`: how many holds were refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtendOutcome {
	pub message: String,
	pub count: u32,
}

/// Outcome of `POST /seats/book`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookOutcome {
	pub message: String,
	pub booked_count: u32,
}

/// Outcome of `POST /payment/start`. The service re-extends the seat holds
/// before opening the payment window, and reports when that window closes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentStarted {
	pub message: String,
	#[serde(default)]
	pub extended_count: u32,
	#[serde(default)]
	pub expire_at: Option<String>,
}

/// Outcome of `POST /payment/cancel`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelOutcome {
	pub message: String,
}

/// One row of the admin bookings report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminBooking {
	pub id: String,
	pub user_email: String,
	pub user_name: String,
	pub movie_title: String,
	#[serde(default)]
	pub poster_url: String,
	pub screening_time: String,
	pub seat_id: String,
	pub status: String,
	pub amount: f64,
	pub created_at: String,
}

/// Uniform error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteError {
	pub error: String,
}
