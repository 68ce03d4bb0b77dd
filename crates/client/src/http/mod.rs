//! Outbound request pipeline.
//!
//! Every call to the remote service passes through two interception
//! points: outgoing (credential injection after the local expiry sweep)
//! and incoming (authorization-failure recovery). The pipeline bounds each
//! round trip with the fixed timeout and never retries.

/// Interceptor contract and the two built-in interceptors.
pub mod interceptor;
/// Pipeline composing interceptors around the HTTP client.
pub mod pipeline;

pub use interceptor::{AuthInterceptor, Flow, Interceptor, RecoveryInterceptor, SESSION_EXPIRED_MESSAGE};
pub use pipeline::RequestPipeline;
