//! Navigation side-effect port

/// Port for the hard redirect to the login view.
///
/// Invoked by the credential transport when any response comes back
/// 401, before the error is returned to the caller. Implementations
/// discard in-page state the way a browser navigation would; tests
/// substitute a recording double.
pub trait Navigator: Send + Sync {
    /// Performs the full navigation to the login view.
    fn redirect_to_login(&self);
}
