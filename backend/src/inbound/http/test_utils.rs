//! Shared helpers for handler unit tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

use crate::domain::ports::{MockApplicationsCommand, MockApplicationsQuery, MockAuthCommand};
use crate::inbound::http::state::HttpState;

/// Build state from mocks; unused ports get expectation-free mocks so any
/// unexpected call fails the test.
pub(crate) fn state_from_mocks(
    auth: MockAuthCommand,
    applications: MockApplicationsCommand,
    applications_query: MockApplicationsQuery,
) -> HttpState {
    HttpState::new(
        Arc::new(auth),
        Arc::new(applications),
        Arc::new(applications_query),
    )
}

pub(crate) fn auth_state(auth: MockAuthCommand) -> HttpState {
    state_from_mocks(
        auth,
        MockApplicationsCommand::new(),
        MockApplicationsQuery::new(),
    )
}

/// Read the response body as JSON.
pub(crate) async fn json_body<B>(res: ServiceResponse<B>) -> Value
where
    B: MessageBody,
{
    let bytes = test::read_body(res).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
