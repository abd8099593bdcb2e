//! Port for funding application persistence.

use async_trait::async_trait;

use crate::domain::{Application, ApplicationId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by application repository adapters.
    pub enum ApplicationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "application repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "application repository query failed: {message}",
    }
}

/// Port for writing applications and reading them back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Persist a new application.
    async fn insert(&self, application: &Application) -> Result<(), ApplicationRepositoryError>;

    /// Every stored application, newest `created_at` first with ties broken
    /// by descending id.
    async fn list_newest_first(&self) -> Result<Vec<Application>, ApplicationRepositoryError>;

    /// Find one application by id.
    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationRepositoryError>;
}
