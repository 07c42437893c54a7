//! Gatehouse - Session Core Entry Point
//!
//! Wires the adapters into the session controller, restores any
//! persisted session, and reports the route guard's verdict for the
//! dashboard.

use std::sync::Arc;

use gatehouse_application::ports::{Navigator, TokenStorage};
use gatehouse_application::{SessionController, SessionStore};
use gatehouse_domain::{evaluate, RouteDecision};
use gatehouse_infrastructure::{
    ApiClient, ApiConfig, FileTokenStorage, RestAuthTransport, SessionNavigator,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ApiConfig::from_env();
    info!(base_url = %config.base_url, "starting gatehouse");

    let store = Arc::new(SessionStore::new());
    let storage = Arc::new(FileTokenStorage::default_location()?);
    let navigator: Arc<dyn Navigator> = Arc::new(SessionNavigator::new(Arc::clone(&store)));
    let client = Arc::new(ApiClient::new(
        &config,
        Arc::clone(&storage) as Arc<dyn TokenStorage>,
        navigator,
    )?);
    let transport = RestAuthTransport::new(client);
    let controller = SessionController::new(transport, Arc::clone(&storage), Arc::clone(&store));

    store.subscribe(|session| {
        info!(
            authenticated = session.is_authenticated(),
            loading = session.is_loading,
            "session changed"
        );
    });

    match controller.rehydrate().await {
        Ok(Some(user)) => info!(user = %user.email, "session restored"),
        Ok(None) => info!("no stored session"),
        Err(err) => info!(kind = err.kind(), "stored session rejected"),
    }

    match evaluate(&store.get(), "/dashboard") {
        RouteDecision::Admit => info!("dashboard admitted"),
        RouteDecision::RedirectToLogin { return_to } => {
            info!(return_to = %return_to, "redirecting to login");
        }
    }

    Ok(())
}
