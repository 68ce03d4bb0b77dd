//! Catalog types: movies, screenings, and the per-screening seat map.

use serde::{Deserialize, Serialize};

/// A movie with its scheduled screenings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub genre: String,
	#[serde(default)]
	pub duration_min: u32,
	#[serde(default)]
	pub poster_url: String,
	#[serde(default)]
	pub screenings: Vec<Screening>,
}

/// A single showing of a movie. `start_time` is the RFC 3339 string the
/// service uses as part of the screening's natural key; the client forwards
/// it verbatim and never parses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Screening {
	pub id: String,
	pub start_time: String,
	pub price: f64,
	#[serde(default)]
	pub seats: Vec<Seat>,
}

/// Seat availability as merged by the service. `Locked` is transient state
/// from the remote hold ledger, never persisted in the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeatStatus {
	Available,
	Locked,
	Booked,
}

/// One seat in a screening's seat map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seat {
	pub id: String,
	pub row: String,
	pub number: u32,
	pub status: SeatStatus,
	/// User currently holding the seat, present only while `status` is
	/// `Locked`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub locked_by: Option<String>,
}
