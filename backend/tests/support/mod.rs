//! Shared helpers for backend HTTP integration tests.
//!
//! Builds the full `/api` app over in-memory stores, real Argon2 hashing and
//! a real JWT issuer, so tests exercise the same wiring as the binary minus
//! PostgreSQL.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use backend::Trace;
use backend::domain::{ApplicationService, AuthService, TRACE_ID_HEADER};
use backend::inbound::http::configure_api;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryApplicationRepository, InMemoryUserRepository};
use backend::outbound::security::{Argon2PasswordHasher, JwtTokenIssuer};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"integration-test-signing-secret";

/// Clock advancing one second per reading so submissions get distinct,
/// increasing timestamps.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            base: Utc
                .with_ymd_and_hms(2026, 1, 5, 9, 0, 0)
                .single()
                .expect("valid base timestamp"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + TimeDelta::seconds(tick)
    }
}

/// Issuer sharing the secret wired into [`in_memory_state`].
pub fn token_issuer() -> JwtTokenIssuer {
    JwtTokenIssuer::new(TEST_SECRET, TimeDelta::hours(24)).expect("valid issuer")
}

/// Auth runs on the wall clock so issued tokens verify against real time;
/// applications use a [`SteppingClock`].
pub fn in_memory_state() -> web::Data<HttpState> {
    let auth = Arc::new(AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(Argon2PasswordHasher),
        Arc::new(token_issuer()),
        Arc::new(DefaultClock),
    ));
    let applications = Arc::new(ApplicationService::new(
        Arc::new(InMemoryApplicationRepository::new()),
        Arc::new(SteppingClock::default()),
    ));
    web::Data::new(HttpState::new(auth, applications.clone(), applications))
}

/// The traced `/api` app over `state`.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
}

/// Status, trace id header and JSON body of a response.
pub async fn read_response<B: MessageBody>(
    res: ServiceResponse<B>,
) -> (u16, Option<String>, Value) {
    let status = res.status().as_u16();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(res).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, trace_id, body)
}
