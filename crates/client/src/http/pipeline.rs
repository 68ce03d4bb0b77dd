//! Request execution: interceptor chaining, timeout bounding, failure
//! classification.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use tix_protocol::RemoteError;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::interceptor::{Flow, Interceptor};

/// Composes the interceptor chain around a single HTTP client.
///
/// Interceptor logic for a given request always runs in the order
/// outgoing, network, incoming; concurrent requests are independent and
/// may complete in any order. The pipeline never retries and never
/// sequences requests.
pub struct RequestPipeline {
	client: reqwest::Client,
	base_url: String,
	timeout: Duration,
	interceptors: Vec<Arc<dyn Interceptor>>,
}

impl RequestPipeline {
	/// Builds a pipeline from the fixed configuration and an ordered
	/// interceptor chain.
	pub fn new(config: &ClientConfig, interceptors: Vec<Arc<dyn Interceptor>>) -> Result<Self> {
		let client = reqwest::Client::builder()
			.timeout(config.timeout)
			.build()
			.map_err(|e| Error::Network(e.to_string()))?;
		Ok(Self {
			client,
			base_url: config.base_url.trim_end_matches('/').to_string(),
			timeout: config.timeout,
			interceptors,
		})
	}

	/// Sends a GET with optional query parameters and decodes the JSON body.
	pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
		let mut builder = self.client.get(self.url(path));
		if !query.is_empty() {
			builder = builder.query(query);
		}
		let request = builder.build().map_err(|e| Error::Network(e.to_string()))?;
		self.execute(request).await
	}

	/// Sends a POST with a JSON body and decodes the JSON response.
	pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
		let request = self
			.client
			.post(self.url(path))
			.json(body)
			.build()
			.map_err(|e| Error::Network(e.to_string()))?;
		self.execute(request).await
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	async fn execute<T: DeserializeOwned>(&self, mut request: reqwest::Request) -> Result<T> {
		debug!(target = "tix.http", method = %request.method(), url = %request.url(), "dispatching request");

		for interceptor in &self.interceptors {
			if interceptor.before_send(&mut request) == Flow::Halt {
				break;
			}
		}

		let response = self
			.client
			.execute(request)
			.await
			.map_err(|err| self.classify_transport(err))?;

		for interceptor in &self.interceptors {
			if interceptor.after_receive(&response).await == Flow::Halt {
				break;
			}
		}

		let status = response.status();
		if status.is_success() {
			return response
				.json::<T>()
				.await
				.map_err(|e| Error::Decode(e.to_string()));
		}

		let message = response
			.json::<RemoteError>()
			.await
			.map(|body| body.error)
			.unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());

		if status == StatusCode::UNAUTHORIZED {
			Err(Error::Unauthorized(message))
		} else {
			Err(Error::Remote {
				status: status.as_u16(),
				message,
			})
		}
	}

	fn classify_transport(&self, err: reqwest::Error) -> Error {
		if err.is_timeout() {
			Error::Timeout(self.timeout)
		} else {
			Error::Network(err.to_string())
		}
	}
}
