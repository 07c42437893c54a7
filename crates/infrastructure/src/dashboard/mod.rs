//! Dashboard data client.
//!
//! Read-only views over the dashboard endpoints. These calls carry no
//! auth logic of their own; they ride the shared [`ApiClient`]
//! pipeline, which is what makes a 401 from a stats request
//! de-authenticate the whole application.

use std::sync::Arc;

use serde::Deserialize;

use crate::http::{ApiClient, HttpError};

/// One headline statistic card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatCard {
    /// Card title, e.g. "Total Revenue".
    pub title: String,
    /// Formatted value, e.g. "$45,231.89".
    pub value: String,
    /// Formatted period-over-period change, e.g. "+20.1%".
    pub change: String,
}

/// One recent-activity row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityEntry {
    /// Server-assigned identifier.
    pub id: i64,
    /// User the activity belongs to.
    pub user: String,
    /// What happened.
    pub action: String,
    /// Human-formatted timestamp, e.g. "2 minutes ago".
    pub time: String,
    /// Optional formatted amount, e.g. "-$250.00".
    #[serde(default)]
    pub amount: Option<String>,
}

/// Client for the dashboard data endpoints.
pub struct DashboardApi {
    client: Arc<ApiClient>,
}

impl DashboardApi {
    /// Creates a client sharing the application-wide [`ApiClient`].
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches the headline statistics.
    ///
    /// # Errors
    ///
    /// See [`HttpError`]; a 401 has already de-authenticated the
    /// application by the time it surfaces here.
    pub async fn stats(&self) -> Result<Vec<StatCard>, HttpError> {
        self.client.get_json("/dashboard/stats").await
    }

    /// Fetches the recent activity feed.
    ///
    /// # Errors
    ///
    /// Same contract as [`DashboardApi::stats`].
    pub async fn recent_activity(&self) -> Result<Vec<ActivityEntry>, HttpError> {
        self.client.get_json("/dashboard/activity").await
    }
}
