//! Request payloads sent to the reservation service.
//!
//! Every operation forwards its parameters verbatim: no client-side
//! validation, no derived fields. The service owns all reservation rules.

use serde::{Deserialize, Serialize};

/// Body for `POST /screenings/details`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreeningDetailsRequest {
	pub movie_id: String,
	pub start_time: String,
}

/// Body for `POST /seats/lock`. Locks a single seat, or releases it when
/// the same user already holds it (the endpoint is a toggle).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockSeatRequest {
	pub user_id: String,
	pub movie_id: String,
	pub start_time: String,
	pub seat_id: String,
}

/// Body for `POST /seats/extend`. Refreshes hold expiry for a batch of seats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtendSeatsRequest {
	pub user_id: String,
	pub movie_id: String,
	pub start_time: String,
	pub seat_ids: Vec<String>,
}

/// Body for `POST /seats/book`. Commits held seats into a booking,
/// optionally tied to a completed payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSeatsRequest {
	pub user_id: String,
	pub movie_id: String,
	pub start_time: String,
	pub seat_ids: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payment_id: Option<String>,
}

/// Body for `POST /payment/start`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartPaymentRequest {
	pub user_id: String,
	pub movie_id: String,
	pub start_time: String,
	pub seat_ids: Vec<String>,
}

/// Body for `POST /payment/cancel`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CancelPaymentRequest {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
}

/// Filters for `GET /admin/bookings`. Each field becomes a query parameter
/// only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingsQuery {
	pub movie_id: Option<String>,
	/// Calendar day filter, `YYYY-MM-DD`.
	pub date: Option<String>,
	/// Partial match against booking-holder name or email.
	pub user: Option<String>,
	pub page: Option<u32>,
	pub limit: Option<u32>,
}

impl BookingsQuery {
	/// Renders the query as `(key, value)` pairs, omitting unset filters.
	pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::new();
		if let Some(movie_id) = &self.movie_id {
			pairs.push(("movie_id", movie_id.clone()));
		}
		if let Some(date) = &self.date {
			pairs.push(("date", date.clone()));
		}
		if let Some(user) = &self.user {
			pairs.push(("user", user.clone()));
		}
		if let Some(page) = self.page {
			pairs.push(("page", page.to_string()));
		}
		if let Some(limit) = self.limit {
			pairs.push(("limit", limit.to_string()));
		}
		pairs
	}
}
