//! End-to-end session flows over a mock HTTP server.
//!
//! These tests drive the real controller, store, transport, and
//! file-backed token storage against wiremock, covering the full
//! login / failed-login / rehydration / global-401 paths.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gatehouse_application::ports::{Navigator, TokenStorage};
use gatehouse_application::{SessionController, SessionStore};
use gatehouse_domain::{evaluate, Credentials, RouteDecision, Session};
use gatehouse_infrastructure::{
    ApiClient, ApiConfig, DashboardApi, FileTokenStorage, RestAuthTransport, SessionNavigator,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Counts redirects while delegating the state discard to the real
/// navigation adapter.
struct TrackingNavigator {
    inner: SessionNavigator,
    redirects: AtomicUsize,
}

impl TrackingNavigator {
    fn new(store: Arc<SessionStore>) -> Self {
        Self {
            inner: SessionNavigator::new(store),
            redirects: AtomicUsize::new(0),
        }
    }

    fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for TrackingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
        self.inner.redirect_to_login();
    }
}

struct Harness {
    server: MockServer,
    _dir: TempDir,
    store: Arc<SessionStore>,
    storage: Arc<FileTokenStorage>,
    navigator: Arc<TrackingNavigator>,
    controller: SessionController<RestAuthTransport, Arc<FileTokenStorage>>,
    dashboard: DashboardApi,
}

async fn harness() -> Harness {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    let store = Arc::new(SessionStore::new());
    let storage = Arc::new(FileTokenStorage::new(dir.path().join("token")));
    let navigator = Arc::new(TrackingNavigator::new(Arc::clone(&store)));

    let client = Arc::new(
        ApiClient::new(
            &ApiConfig::with_base_url(server.uri()),
            Arc::clone(&storage) as Arc<dyn TokenStorage>,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        )
        .expect("client should build"),
    );

    let controller = SessionController::new(
        RestAuthTransport::new(Arc::clone(&client)),
        Arc::clone(&storage),
        Arc::clone(&store),
    );
    let dashboard = DashboardApi::new(client);

    Harness {
        server,
        _dir: dir,
        store,
        storage,
        navigator,
        controller,
        dashboard,
    }
}

fn demo_user_body() -> serde_json::Value {
    serde_json::json!({"id": 1, "name": "Demo", "email": "demo@example.com"})
}

async fn mount_successful_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "demo@example.com",
            "password": "demo123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": token,
            "user": demo_user_body()
        })))
        .mount(server)
        .await;
}

// A successful demo login fills the session.
#[tokio::test]
async fn successful_login_authenticates_and_persists() {
    let h = harness().await;
    mount_successful_login(&h.server, "t1").await;

    let user = h
        .controller
        .login(&Credentials::new("demo@example.com", "demo123"))
        .await
        .expect("login should succeed");
    assert_eq!(user.name, "Demo");

    let session = h.store.get();
    assert!(session.is_authenticated());
    assert_eq!(session.token.as_deref(), Some("t1"));
    assert_eq!(session.error, None);
    assert!(!session.is_loading);

    // Token mirrored to durable storage within the same operation.
    assert_eq!(h.storage.load().await.expect("load").as_deref(), Some("t1"));

    // The guard now admits protected navigation.
    assert_eq!(evaluate(&session, "/dashboard"), RouteDecision::Admit);
}

// A rejected login surfaces the server's message and leaves the
// session unauthenticated.
#[tokio::test]
async fn wrong_password_surfaces_the_server_message() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Invalid credentials"
        })))
        .mount(&h.server)
        .await;

    let err = h
        .controller
        .login(&Credentials::new("demo@example.com", "nope"))
        .await
        .expect_err("login should fail");
    assert_eq!(err.to_string(), "Invalid credentials");

    let session = h.store.get();
    assert_eq!(session.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(session.token, None);
    assert_eq!(session.user, None);

    assert_eq!(
        evaluate(&session, "/dashboard"),
        RouteDecision::RedirectToLogin {
            return_to: "/dashboard".to_string()
        }
    );
}

// Rehydrating an expired stored token ends unauthenticated with the
// durable storage cleared.
#[tokio::test]
async fn expired_stored_token_is_cleared_on_rehydration() {
    let h = harness().await;
    h.storage.store("expired").await.expect("seed token");

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Token expired"
        })))
        .mount(&h.server)
        .await;

    let err = h.controller.rehydrate().await.expect_err("must fail");
    assert!(err.is_session_expired());

    assert_eq!(h.store.get(), Session::default());
    assert_eq!(h.storage.load().await.expect("load"), None);
}

// Rehydration with a live token restores the user without a login.
#[tokio::test]
async fn stored_token_restores_the_session() {
    let h = harness().await;
    h.storage.store("t1").await.expect("seed token");

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": demo_user_body()
        })))
        .mount(&h.server)
        .await;

    let user = h.controller.rehydrate().await.expect("rehydrate");
    assert_eq!(user.map(|u| u.email), Some("demo@example.com".to_string()));
    assert!(h.store.get().is_authenticated());
}

// A 401 from an unrelated dashboard endpoint forces the whole
// application unauthenticated and navigates to login.
#[tokio::test]
async fn dashboard_401_deauthenticates_everything() {
    let h = harness().await;
    mount_successful_login(&h.server, "t1").await;
    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Token expired"
        })))
        .mount(&h.server)
        .await;

    h.controller
        .login(&Credentials::new("demo@example.com", "demo123"))
        .await
        .expect("login");
    assert!(h.store.get().is_authenticated());

    let err = h.dashboard.stats().await.expect_err("stats must fail");
    assert_eq!(err.to_string(), "Token expired");

    assert_eq!(h.navigator.redirect_count(), 1);
    assert_eq!(h.storage.load().await.expect("load"), None);

    let session = h.store.get();
    assert!(!session.is_authenticated());
    assert!(!evaluate(&session, "/dashboard").is_admitted());
}

// A successful dashboard call rides the same pipeline with the bearer
// attached.
#[tokio::test]
async fn dashboard_calls_carry_the_session_token() {
    let h = harness().await;
    mount_successful_login(&h.server, "t1").await;
    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .and(header("Authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"title": "Orders", "value": "324", "change": "-5.2%"}
        ])))
        .mount(&h.server)
        .await;

    h.controller
        .login(&Credentials::new("demo@example.com", "demo123"))
        .await
        .expect("login");

    let stats = h.dashboard.stats().await.expect("stats");
    assert_eq!(stats[0].value, "324");
}

// Logout clears every trace of the session; a second logout changes
// nothing.
#[tokio::test]
async fn logout_round_trip_leaves_no_state_behind() {
    let h = harness().await;
    mount_successful_login(&h.server, "t1").await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&h.server)
        .await;

    h.controller
        .login(&Credentials::new("demo@example.com", "demo123"))
        .await
        .expect("login");

    h.controller.logout().await;
    assert_eq!(h.store.get(), Session::default());
    assert_eq!(h.storage.load().await.expect("load"), None);

    h.controller.logout().await;
    assert_eq!(h.store.get(), Session::default());
}

// Subscribers observe the loading -> authenticated transition in
// order.
#[tokio::test]
async fn subscribers_observe_the_login_transitions() {
    let h = harness().await;
    mount_successful_login(&h.server, "t1").await;

    let states = Arc::new(std::sync::Mutex::new(Vec::new()));
    let states_clone = Arc::clone(&states);
    h.store.subscribe(move |session| {
        states_clone
            .lock()
            .unwrap()
            .push((session.is_loading, session.is_authenticated()));
    });

    h.controller
        .login(&Credentials::new("demo@example.com", "demo123"))
        .await
        .expect("login");

    let states = states.lock().unwrap().clone();
    assert_eq!(states, vec![(true, false), (false, true)]);
}
