//! Driving port for application reads.

use async_trait::async_trait;

use crate::domain::{Application, ApplicationId, Error};

/// Driving port for listing and fetching applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationsQuery: Send + Sync {
    /// All applications, newest first.
    async fn list_all(&self) -> Result<Vec<Application>, Error>;

    /// One application by id, or [`crate::domain::ErrorCode::NotFound`].
    async fn find_by_id(&self, id: &ApplicationId) -> Result<Application, Error>;
}
