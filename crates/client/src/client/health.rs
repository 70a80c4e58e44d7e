//! Health check operations.

use huddle_core::service::HealthReport;

use super::HuddleClient;
use crate::error::Result;

impl HuddleClient {
    /// Check store and cache health.
    ///
    /// An unhealthy server answers 503 with a report body, which is returned
    /// as a report rather than an error.
    pub async fn health(&self) -> Result<HealthReport> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Ok(response.json().await?);
        }
        self.handle_response(response).await
    }
}
