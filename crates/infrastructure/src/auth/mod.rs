//! Credential transport adapter.

mod rest_transport;

pub use rest_transport::RestAuthTransport;
