//! The shared request pipeline.

use std::sync::Arc;

use gatehouse_application::ports::{Navigator, TokenStorage};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use super::{ApiConfig, HttpError};

/// Error body shape used by the API for failure statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client every outbound request goes through.
///
/// The pipeline applied to each request, in order:
///
/// 1. If a token is present in durable storage, attach
///    `Authorization: Bearer <token>`; absence sends the request
///    unauthenticated without raising an error.
/// 2. Enforce the per-request timeout budget.
/// 3. On a 401 response, clear the durable token and trigger the hard
///    redirect to the login view, then reject. This rule is
///    request-shape-independent: a dashboard call de-authenticates
///    exactly like an auth call.
/// 4. On any other failure status, reject with the parsed `{message}`
///    body. On no response at all, log and reject without touching
///    the token.
pub struct ApiClient {
    client: Client,
    base_url: String,
    storage: Arc<dyn TokenStorage>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Creates a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        config: &ApiConfig,
        storage: Arc<dyn TokenStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(concat!("Gatehouse/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| HttpError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            storage,
            navigator,
        })
    }

    /// GET `path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure taxonomy.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let response = self.send(self.client.get(self.endpoint(path)?)).await?;
        Self::decode(response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure taxonomy.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.client.post(self.endpoint(path)?).json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST to `path` without a body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure taxonomy.
    pub async fn post_for_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let response = self.send(self.client.post(self.endpoint(path)?)).await?;
        Self::decode(response).await
    }

    /// POST to `path` without a body, discarding the response body.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure taxonomy.
    pub async fn post_for_status(&self, path: &str) -> Result<(), HttpError> {
        self.send(self.client.post(self.endpoint(path)?))
            .await
            .map(drop)
    }

    fn endpoint(&self, path: &str) -> Result<Url, HttpError> {
        let url = format!("{}{path}", self.base_url);
        Url::parse(&url).map_err(|e| HttpError::InvalidUrl(format!("{e}: {url}")))
    }

    /// Runs one request through the interceptor pipeline.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, HttpError> {
        let builder = match self.storage.load().await {
            Ok(Some(token)) => builder.bearer_auth(token),
            Ok(None) => builder,
            Err(err) => {
                warn!(error = %err, "token storage unreadable, sending unauthenticated");
                builder
            }
        };

        let response = builder.send().await.map_err(|err| {
            warn!(error = %err, "request failed without a response");
            HttpError::from_send(&err)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let message = Self::failure_message(response, status).await;
            if let Err(err) = self.storage.clear().await {
                warn!(error = %err, "failed to clear token storage after 401");
            }
            self.navigator.redirect_to_login();
            return Err(HttpError::Unauthorized { message });
        }
        if !status.is_success() {
            let message = Self::failure_message(response, status).await;
            return Err(HttpError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Extracts the `{message}` body, falling back to the status text.
    async fn failure_message(response: Response, status: StatusCode) -> String {
        let fallback = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
        let Ok(text) = response.text().await else {
            return fallback;
        };
        serde_json::from_str::<ErrorBody>(&text).map_or(fallback, |body| body.message)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
        response
            .json::<T>()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))
    }
}
