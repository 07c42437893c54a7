//! Gatehouse Application - Session orchestration
//!
//! This crate holds the session store (the single source of truth for
//! "is the caller authenticated") and the session controller (the only
//! writer of that state), behind ports implemented by the
//! infrastructure layer.

pub mod ports;
mod session_controller;
mod session_store;

pub use session_controller::SessionController;
pub use session_store::{SessionStore, SubscriberId};
