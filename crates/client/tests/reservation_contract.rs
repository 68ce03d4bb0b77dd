//! Wire-contract tests for the reservation façade: payloads forwarded
//! verbatim, optional fields omitted when absent, responses decoded into
//! the typed outcomes.

use std::sync::{Arc, Mutex};

use axum::extract::RawQuery;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use tix_client::protocol::{BookingsQuery, SeatStatus};
use tix_client::{Client, ClientConfig, MemoryStorage};

type CapturedBodies = Arc<Mutex<Vec<Value>>>;

async fn serve(app: Router) -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("listener should bind");
	let addr = listener.local_addr().expect("local addr should resolve");
	tokio::spawn(async move {
		axum::serve(listener, app).await.expect("test server should run");
	});
	format!("http://{addr}")
}

/// Single-route server that records POST bodies and replies with `reply`.
async fn capturing_post_server(path: &'static str, reply: Value) -> (String, CapturedBodies) {
	let captured: CapturedBodies = Arc::new(Mutex::new(Vec::new()));
	let bodies = Arc::clone(&captured);
	let app = Router::new().route(
		path,
		post(move |Json(body): Json<Value>| {
			let bodies = Arc::clone(&bodies);
			let reply = reply.clone();
			async move {
				bodies.lock().expect("capture lock").push(body);
				Json(reply)
			}
		}),
	);
	(serve(app).await, captured)
}

fn client_for(base_url: &str) -> Client {
	Client::new(ClientConfig::new(base_url), Arc::new(MemoryStorage::new())).expect("client should build")
}

fn single_body(captured: &CapturedBodies) -> Value {
	let bodies = captured.lock().expect("capture lock");
	assert_eq!(bodies.len(), 1, "expected exactly one request");
	bodies[0].clone()
}

#[tokio::test]
async fn lock_seat_forwards_the_payload_verbatim() {
	let reply = json!({ "message": "Seat locked", "status": "LOCKED" });
	let (base_url, captured) = capturing_post_server("/seats/lock", reply).await;

	let outcome = client_for(&base_url)
		.reservations()
		.lock_seat("u1", "m1", "2026-08-06T20:00:00Z", "A1")
		.await
		.expect("lock should succeed");

	assert_eq!(
		single_body(&captured),
		json!({
			"user_id": "u1",
			"movie_id": "m1",
			"start_time": "2026-08-06T20:00:00Z",
			"seat_id": "A1",
		})
	);
	assert_eq!(outcome.status, "LOCKED");
}

#[tokio::test]
async fn lock_seat_surfaces_the_remote_toggle_release() {
	let reply = json!({ "message": "Seat unlocked", "status": "AVAILABLE" });
	let (base_url, _captured) = capturing_post_server("/seats/lock", reply).await;

	let outcome = client_for(&base_url)
		.reservations()
		.lock_seat("u1", "m1", "2026-08-06T20:00:00Z", "A1")
		.await
		.expect("release should succeed");

	assert_eq!(outcome.status, "AVAILABLE", "same-user re-lock releases the hold");
}

#[tokio::test]
async fn extend_seats_forwards_the_whole_batch() {
	let reply = json!({ "message": "Locks extended", "count": 2 });
	let (base_url, captured) = capturing_post_server("/seats/extend", reply).await;

	let seats = vec!["A1".to_string(), "A2".to_string()];
	let outcome = client_for(&base_url)
		.reservations()
		.extend_seats("u1", "m1", "2026-08-06T20:00:00Z", &seats)
		.await
		.expect("extend should succeed");

	assert_eq!(
		single_body(&captured),
		json!({
			"user_id": "u1",
			"movie_id": "m1",
			"start_time": "2026-08-06T20:00:00Z",
			"seat_ids": ["A1", "A2"],
		})
	);
	assert_eq!(outcome.count, 2);
}

#[tokio::test]
async fn book_seats_omits_payment_id_when_absent() {
	let reply = json!({ "message": "Booking Success", "booked_count": 1 });
	let (base_url, captured) = capturing_post_server("/seats/book", reply).await;

	let seats = vec!["A1".to_string()];
	client_for(&base_url)
		.reservations()
		.book_seats("u1", "m1", "2026-08-06T20:00:00Z", &seats, None)
		.await
		.expect("book should succeed");

	assert_eq!(
		single_body(&captured),
		json!({
			"user_id": "u1",
			"movie_id": "m1",
			"start_time": "2026-08-06T20:00:00Z",
			"seat_ids": ["A1"],
		}),
		"absent payment_id must not appear in the payload"
	);
}

#[tokio::test]
async fn book_seats_carries_payment_id_when_present() {
	let reply = json!({ "message": "Booking Success", "booked_count": 1 });
	let (base_url, captured) = capturing_post_server("/seats/book", reply).await;

	let seats = vec!["A1".to_string()];
	let outcome = client_for(&base_url)
		.reservations()
		.book_seats("u1", "m1", "2026-08-06T20:00:00Z", &seats, Some("pay-7"))
		.await
		.expect("book should succeed");

	assert_eq!(single_body(&captured)["payment_id"], json!("pay-7"));
	assert_eq!(outcome.booked_count, 1);
}

#[tokio::test]
async fn start_payment_decodes_the_window_details() {
	let reply = json!({
		"message": "Payment started",
		"extended_count": 2,
		"expire_at": "2026-08-06T20:05:00Z",
	});
	let (base_url, captured) = capturing_post_server("/payment/start", reply).await;

	let seats = vec!["A1".to_string(), "A2".to_string()];
	let started = client_for(&base_url)
		.reservations()
		.start_payment("u1", "m1", "2026-08-06T20:00:00Z", &seats)
		.await
		.expect("start should succeed");

	assert_eq!(single_body(&captured)["seat_ids"], json!(["A1", "A2"]));
	assert_eq!(started.extended_count, 2);
	assert_eq!(started.expire_at.as_deref(), Some("2026-08-06T20:05:00Z"));
}

#[tokio::test]
async fn cancel_payment_sends_an_empty_body_without_reason() {
	let reply = json!({ "message": "Payment processed" });
	let (base_url, captured) = capturing_post_server("/payment/cancel", reply).await;

	client_for(&base_url)
		.reservations()
		.cancel_payment(None)
		.await
		.expect("cancel should succeed");

	assert_eq!(single_body(&captured), json!({}));
}

#[tokio::test]
async fn cancel_payment_forwards_the_reason_when_given() {
	let reply = json!({ "message": "Payment processed" });
	let (base_url, captured) = capturing_post_server("/payment/cancel", reply).await;

	client_for(&base_url)
		.reservations()
		.cancel_payment(Some("user navigated away"))
		.await
		.expect("cancel should succeed");

	assert_eq!(single_body(&captured), json!({ "reason": "user navigated away" }));
}

#[tokio::test]
async fn admin_bookings_includes_only_provided_filters() {
	let seen_query: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
	let queries = Arc::clone(&seen_query);
	let app = Router::new().route(
		"/admin/bookings",
		get(move |RawQuery(query): RawQuery| {
			let queries = Arc::clone(&queries);
			async move {
				queries.lock().expect("capture lock").push(query);
				Json(json!([]))
			}
		}),
	);
	let base_url = serve(app).await;
	let client = client_for(&base_url);

	let query = BookingsQuery {
		movie_id: Some("m1".to_string()),
		user: Some("alice".to_string()),
		..BookingsQuery::default()
	};
	client
		.reservations()
		.admin_bookings(&query)
		.await
		.expect("query should succeed");

	client
		.reservations()
		.admin_bookings(&BookingsQuery::default())
		.await
		.expect("unfiltered query should succeed");

	let seen = seen_query.lock().expect("capture lock");
	assert_eq!(seen[0].as_deref(), Some("movie_id=m1&user=alice"));
	assert_eq!(seen[1], None, "no filters means no query string");
}

#[tokio::test]
async fn screening_details_decodes_the_merged_seat_map() {
	let reply = json!({
		"screening": {
			"id": "s1",
			"start_time": "2026-08-06T20:00:00Z",
			"price": 12.5,
			"seats": [
				{ "id": "A1", "row": "A", "number": 1, "status": "AVAILABLE" },
				{ "id": "A2", "row": "A", "number": 2, "status": "LOCKED", "locked_by": "u9" },
				{ "id": "A3", "row": "A", "number": 3, "status": "BOOKED" },
			],
		},
		"movie": { "id": "m1", "title": "Arrival", "duration_min": 116 },
	});
	let (base_url, captured) = capturing_post_server("/screenings/details", reply).await;

	let details = client_for(&base_url)
		.reservations()
		.screening_details("m1", "2026-08-06T20:00:00Z")
		.await
		.expect("details should succeed");

	assert_eq!(
		single_body(&captured),
		json!({ "movie_id": "m1", "start_time": "2026-08-06T20:00:00Z" })
	);
	assert_eq!(details.movie.title, "Arrival");
	assert_eq!(details.screening.seats.len(), 3);
	let held = &details.screening.seats[1];
	assert_eq!(held.status, SeatStatus::Locked);
	assert_eq!(held.locked_by.as_deref(), Some("u9"));
}

#[tokio::test]
async fn list_movies_decodes_the_catalog() {
	let app = Router::new().route(
		"/movies",
		get(|| async {
			Json(json!([
				{
					"id": "m1",
					"title": "Arrival",
					"description": "First contact",
					"genre": "sci-fi",
					"duration_min": 116,
					"poster_url": "/posters/m1.jpg",
					"screenings": [
						{ "id": "s1", "start_time": "2026-08-06T20:00:00Z", "price": 12.5 },
					],
				},
			]))
		}),
	);
	let base_url = serve(app).await;

	let movies = client_for(&base_url)
		.reservations()
		.list_movies()
		.await
		.expect("listing should succeed");

	assert_eq!(movies.len(), 1);
	assert_eq!(movies[0].title, "Arrival");
	assert_eq!(movies[0].screenings[0].price, 12.5);
}
