//! Funding application services.
//!
//! Submission validates the numeric fields, fills in the status default and
//! stamps `created_at` from the injected clock; client-supplied timestamps
//! never reach this layer.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationsCommand, ApplicationsQuery,
};
use crate::domain::{Application, ApplicationId, Error, NewApplication};

/// Application service implementing the submission and read ports.
#[derive(Clone)]
pub struct ApplicationService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ApplicationService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn map_repository_error(error: ApplicationRepositoryError) -> Error {
    match error {
        ApplicationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("application repository unavailable: {message}"))
        }
        ApplicationRepositoryError::Query { message } => {
            Error::internal(format!("application repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> ApplicationsCommand for ApplicationService<R>
where
    R: ApplicationRepository,
{
    async fn submit(&self, application: NewApplication) -> Result<Application, Error> {
        let NewApplication { details, status } = application;
        let details = details
            .validate()
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let application =
            Application::submitted(NewApplication { details, status }, self.clock.utc());
        self.repository
            .insert(&application)
            .await
            .map_err(map_repository_error)?;

        info!(application_id = %application.id(), "application submitted");
        Ok(application)
    }
}

#[async_trait]
impl<R> ApplicationsQuery for ApplicationService<R>
where
    R: ApplicationRepository,
{
    async fn list_all(&self) -> Result<Vec<Application>, Error> {
        self.repository
            .list_newest_first()
            .await
            .map_err(map_repository_error)
    }

    async fn find_by_id(&self, id: &ApplicationId) -> Result<Application, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("application {id} not found")))
    }
}
