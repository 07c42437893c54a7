//! Gatehouse Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined
//! in the application layer: the reqwest-backed credential transport,
//! the dashboard data client, file-backed token storage, and the
//! navigation adapter.

pub mod auth;
pub mod dashboard;
pub mod http;
pub mod navigation;
pub mod persistence;

pub use auth::RestAuthTransport;
pub use dashboard::{ActivityEntry, DashboardApi, StatCard};
pub use http::{ApiClient, ApiConfig, HttpError};
pub use navigation::SessionNavigator;
pub use persistence::FileTokenStorage;
