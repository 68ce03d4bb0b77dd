//! Typed façade over the request pipeline for reservation operations.
//!
//! Each method is a single request/response round trip: parameters are
//! forwarded verbatim as the wire payload, and every reservation rule
//! (hold expiry, conflicts, payment windows) lives in the remote service.
//! No client-side retries, no local lock state.

use std::sync::Arc;

use tix_protocol::{
	AdminBooking, BookOutcome, BookSeatsRequest, BookingsQuery, CancelOutcome, CancelPaymentRequest,
	ExtendOutcome, ExtendSeatsRequest, LockOutcome, LockSeatRequest, Movie, PaymentStarted,
	ScreeningDetails, ScreeningDetailsRequest, StartPaymentRequest,
};

use crate::error::Result;
use crate::http::RequestPipeline;

/// Remote reservation operations. Cheap to clone; all clones share the
/// process-wide pipeline.
#[derive(Clone)]
pub struct ReservationClient {
	pipeline: Arc<RequestPipeline>,
}

impl ReservationClient {
	pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
		Self { pipeline }
	}

	/// Lists the movie catalog with scheduled screenings.
	pub async fn list_movies(&self) -> Result<Vec<Movie>> {
		self.pipeline.get_json("/movies", &[]).await
	}

	/// Fetches one screening's seat map, with transient holds merged in.
	pub async fn screening_details(&self, movie_id: &str, start_time: &str) -> Result<ScreeningDetails> {
		let request = ScreeningDetailsRequest {
			movie_id: movie_id.to_string(),
			start_time: start_time.to_string(),
		};
		self.pipeline.post_json("/screenings/details", &request).await
	}

	/// Takes (or, for a seat the same user already holds, releases) a
	/// temporary hold on a single seat. The outcome's `status` reports the
	/// seat's state after the toggle.
	pub async fn lock_seat(&self, user_id: &str, movie_id: &str, start_time: &str, seat_id: &str) -> Result<LockOutcome> {
		let request = LockSeatRequest {
			user_id: user_id.to_string(),
			movie_id: movie_id.to_string(),
			start_time: start_time.to_string(),
			seat_id: seat_id.to_string(),
		};
		self.pipeline.post_json("/seats/lock", &request).await
	}

	/// Refreshes hold expiry for a set of seats.
	pub async fn extend_seats(&self, user_id: &str, movie_id: &str, start_time: &str, seat_ids: &[String]) -> Result<ExtendOutcome> {
		let request = ExtendSeatsRequest {
			user_id: user_id.to_string(),
			movie_id: movie_id.to_string(),
			start_time: start_time.to_string(),
			seat_ids: seat_ids.to_vec(),
		};
		self.pipeline.post_json("/seats/extend", &request).await
	}

	/// Commits held seats into a booking, optionally tied to a completed
	/// payment.
	pub async fn book_seats(
		&self,
		user_id: &str,
		movie_id: &str,
		start_time: &str,
		seat_ids: &[String],
		payment_id: Option<&str>,
	) -> Result<BookOutcome> {
		let request = BookSeatsRequest {
			user_id: user_id.to_string(),
			movie_id: movie_id.to_string(),
			start_time: start_time.to_string(),
			seat_ids: seat_ids.to_vec(),
			payment_id: payment_id.map(str::to_string),
		};
		self.pipeline.post_json("/seats/book", &request).await
	}

	/// Opens a payment window for the held seats.
	pub async fn start_payment(&self, user_id: &str, movie_id: &str, start_time: &str, seat_ids: &[String]) -> Result<PaymentStarted> {
		let request = StartPaymentRequest {
			user_id: user_id.to_string(),
			movie_id: movie_id.to_string(),
			start_time: start_time.to_string(),
			seat_ids: seat_ids.to_vec(),
		};
		self.pipeline.post_json("/payment/start", &request).await
	}

	/// Abandons the in-flight payment window.
	pub async fn cancel_payment(&self, reason: Option<&str>) -> Result<CancelOutcome> {
		let request = CancelPaymentRequest {
			reason: reason.map(str::to_string),
		};
		self.pipeline.post_json("/payment/cancel", &request).await
	}

	/// Admin-only bookings report. Filters become query parameters only
	/// when provided; authorization is enforced remotely, not here.
	pub async fn admin_bookings(&self, query: &BookingsQuery) -> Result<Vec<AdminBooking>> {
		self.pipeline.get_json("/admin/bookings", &query.to_pairs()).await
	}
}
