//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use backend::domain::ports::{ApplicationRepository, UserRepository};
use backend::domain::{ApplicationService, AuthService};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryApplicationRepository, InMemoryUserRepository};
use backend::outbound::persistence::{DieselApplicationRepository, DieselUserRepository};
use backend::outbound::security::{Argon2PasswordHasher, JwtTokenIssuer};

use super::ServerConfig;

/// Wire services over a pair of stores.
fn build_services<U, A>(
    users: Arc<U>,
    applications: Arc<A>,
    tokens: Arc<JwtTokenIssuer>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    A: ApplicationRepository + 'static,
{
    let auth = Arc::new(AuthService::new(
        users,
        Arc::new(Argon2PasswordHasher),
        tokens,
        clock.clone(),
    ));
    let applications = Arc::new(ApplicationService::new(applications, clock));
    HttpState::new(auth, applications.clone(), applications)
}

/// Build the shared HTTP state, selecting PostgreSQL adapters when a pool
/// is configured and in-memory stores otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let tokens = config.token_issuer.clone();
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => build_services(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselApplicationRepository::new(pool.clone())),
            tokens,
            clock,
        ),
        None => {
            info!("no database configured; using in-memory stores");
            build_services(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryApplicationRepository::new()),
                tokens,
                clock,
            )
        }
    };
    web::Data::new(state)
}
