//! Driving port for application submission.

use async_trait::async_trait;

use crate::domain::{Application, Error, NewApplication};

/// Driving port for creating funding applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationsCommand: Send + Sync {
    /// Validate, default and persist a new application.
    ///
    /// Validation failures surface as [`crate::domain::ErrorCode::InvalidRequest`];
    /// storage failures as server faults.
    async fn submit(&self, application: NewApplication) -> Result<Application, Error>;
}
