//! Errors and reports produced by the event service.

mod error;
mod health;

pub use error::{service_error_to_status_code, ServiceError};
pub use health::{ComponentStatus, HealthReport, HealthStatus};
