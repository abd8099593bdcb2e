//! In-memory `ApplicationRepository`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{ApplicationRepository, ApplicationRepositoryError};
use crate::domain::{Application, ApplicationId, newest_first};

/// Process-local application store, used when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    applications: Mutex<HashMap<ApplicationId, Application>>,
}

impl InMemoryApplicationRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> ApplicationRepositoryError {
    ApplicationRepositoryError::query("application store lock poisoned")
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn insert(&self, application: &Application) -> Result<(), ApplicationRepositoryError> {
        let mut applications = self.applications.lock().map_err(|_| poisoned())?;
        applications.insert(*application.id(), application.clone());
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Application>, ApplicationRepositoryError> {
        let applications = self.applications.lock().map_err(|_| poisoned())?;
        let mut listed: Vec<Application> = applications.values().cloned().collect();
        listed.sort_by(newest_first);
        Ok(listed)
    }

    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        let applications = self.applications.lock().map_err(|_| poisoned())?;
        Ok(applications.get(id).cloned())
    }
}
