use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Connected,
    Disconnected,
}

impl ComponentStatus {
    fn from_ok(ok: bool) -> Self {
        if ok {
            ComponentStatus::Connected
        } else {
            ComponentStatus::Disconnected
        }
    }
}

/// Result of probing the store and the cache.
///
/// The service is healthy only when both collaborators answer, regardless of
/// the cache fault policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub database: ComponentStatus,
    pub cache: ComponentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    /// Builds a report from the two probe outcomes; the first failure becomes
    /// the reported error.
    pub fn from_probes(
        database: Result<(), String>,
        cache: Result<(), String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let error = database.clone().err().or_else(|| cache.clone().err());
        let status = if error.is_none() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };

        Self {
            status,
            database: ComponentStatus::from_ok(database.is_ok()),
            cache: ComponentStatus::from_ok(cache.is_ok()),
            error,
            timestamp,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
