//! Navigation adapter for the hard redirect to login.

use std::sync::Arc;

use gatehouse_application::ports::Navigator;
use gatehouse_application::SessionStore;
use gatehouse_domain::{Session, LOGIN_PATH};
use tracing::warn;

/// `Navigator` that models the browser's full navigation: the in-page
/// session state is discarded and the navigation is logged.
pub struct SessionNavigator {
    store: Arc<SessionStore>,
}

impl SessionNavigator {
    /// Creates a navigator that clears the given store on redirect.
    #[must_use]
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

impl Navigator for SessionNavigator {
    fn redirect_to_login(&self) {
        warn!(path = LOGIN_PATH, "session invalidated, navigating to login");
        self.store.update(Session::clear);
    }
}
