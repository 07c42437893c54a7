//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the session core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer, or by a hand-rolled double in tests.

mod navigator;
mod token_storage;
mod transport;

pub use navigator::Navigator;
pub use token_storage::{StorageError, TokenStorage};
pub use transport::{AuthSuccess, AuthTransport};
