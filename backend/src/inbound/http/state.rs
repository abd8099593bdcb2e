//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on the driving
//! ports, so they can be exercised with in-memory adapters or mocks.

use std::sync::Arc;

use crate::domain::ports::{ApplicationsCommand, ApplicationsQuery, AuthCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthCommand>,
    pub applications: Arc<dyn ApplicationsCommand>,
    pub applications_query: Arc<dyn ApplicationsQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(
        auth: Arc<dyn AuthCommand>,
        applications: Arc<dyn ApplicationsCommand>,
        applications_query: Arc<dyn ApplicationsQuery>,
    ) -> Self {
        Self {
            auth,
            applications,
            applications_query,
        }
    }
}
