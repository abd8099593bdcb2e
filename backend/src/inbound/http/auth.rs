//! Signup and login handlers.
//!
//! ```text
//! POST /api/auth/signup/sme {"email":"sme1@test.com","password":"pw123"}
//! POST /api/auth/login/sme  {"email":"sme1@test.com","password":"pw123"}
//! ```
//!
//! Login failures deliberately collapse to one message so callers cannot
//! probe which emails are registered.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::domain::{AuthError, Credentials, CredentialsValidationError, Error, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

const INVALID_LOGIN_MESSAGE: &str = "Invalid email or password";

/// Email/password body shared by every auth endpoint.
///
/// Missing fields deserialise as empty strings and are rejected by
/// [`Credentials::try_from_parts`].
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    #[serde(default)]
    #[schema(example = "sme1@test.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "pw123")]
    pub password: String,
}

impl TryFrom<CredentialsRequest> for Credentials {
    type Error = CredentialsValidationError;

    fn try_from(value: CredentialsRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Acknowledgement body.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "SME created successfully!")]
    pub message: String,
}

/// Successful login body.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    /// HS256 bearer token bound to the account's email and role.
    pub token: String,
}

fn map_validation_error(err: CredentialsValidationError) -> Error {
    let (field, code) = match err {
        CredentialsValidationError::EmptyEmail => ("email", "empty_email"),
        CredentialsValidationError::EmptyPassword => ("password", "empty_password"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn map_signup_error(err: AuthError) -> Error {
    match err {
        AuthError::Validation(inner) => map_validation_error(inner),
        AuthError::DuplicateEmail { .. } => Error::invalid_request(err.to_string()),
        AuthError::Unavailable { message } => {
            error!(%message, "signup failed: credential store unavailable");
            Error::service_unavailable(message)
        }
        other => {
            error!(error = %other, "signup failed");
            Error::internal(other.to_string())
        }
    }
}

fn map_login_error(err: AuthError) -> Error {
    match err {
        AuthError::RoleMismatch { .. } => Error::invalid_request(err.to_string()),
        other => {
            if other.is_infrastructure() {
                error!(error = %other, "login failed on infrastructure error");
            }
            Error::invalid_request(INVALID_LOGIN_MESSAGE)
        }
    }
}

fn signup_message(role: Role) -> &'static str {
    match role {
        Role::Sme => "SME created successfully!",
        Role::Investor => "Investor created successfully!",
    }
}

async fn signup(
    state: &HttpState,
    payload: CredentialsRequest,
    role: Role,
) -> ApiResult<web::Json<MessageResponse>> {
    let credentials = Credentials::try_from(payload).map_err(map_validation_error)?;
    let outcome = state
        .auth
        .signup(credentials, role)
        .await
        .map_err(map_signup_error)?;
    Ok(web::Json(MessageResponse {
        message: signup_message(outcome.role).to_owned(),
    }))
}

async fn login(
    state: &HttpState,
    payload: CredentialsRequest,
    role: Role,
) -> ApiResult<web::Json<LoginResponse>> {
    // Blank fields get the same answer as a wrong password.
    let credentials = Credentials::try_from(payload)
        .map_err(|_| Error::invalid_request(INVALID_LOGIN_MESSAGE))?;
    let outcome = state
        .auth
        .login(credentials, role)
        .await
        .map_err(map_login_error)?;
    Ok(web::Json(LoginResponse {
        message: "Login successful".to_owned(),
        token: outcome.token.into_inner(),
    }))
}

/// Register an SME account.
#[utoipa::path(
    post,
    path = "/api/auth/signup/sme",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Account created", body = MessageResponse),
        (status = 400, description = "Invalid request or duplicate email", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "signupSme",
    security([])
)]
#[post("/auth/signup/sme")]
pub async fn signup_sme(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    signup(&state, payload.into_inner(), Role::Sme).await
}

/// Register an investor account.
#[utoipa::path(
    post,
    path = "/api/auth/signup/investor",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Account created", body = MessageResponse),
        (status = 400, description = "Invalid request or duplicate email", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "signupInvestor",
    security([])
)]
#[post("/auth/signup/investor")]
pub async fn signup_investor(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    signup(&state, payload.into_inner(), Role::Investor).await
}

/// Exchange SME credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login/sme",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid credentials or wrong role", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "loginSme",
    security([])
)]
#[post("/auth/login/sme")]
pub async fn login_sme(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    login(&state, payload.into_inner(), Role::Sme).await
}

/// Exchange investor credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login/investor",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid credentials or wrong role", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "loginInvestor",
    security([])
)]
#[post("/auth/login/investor")]
pub async fn login_investor(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    login(&state, payload.into_inner(), Role::Investor).await
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
