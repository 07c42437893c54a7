//! HTTP plumbing shared by every outbound request.
//!
//! All transport calls, auth and dashboard alike, pass through the
//! [`ApiClient`] pipeline: bearer attachment, the global 401 rule,
//! the timeout budget, and error mapping.

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use error::HttpError;
