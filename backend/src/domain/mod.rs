//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed entities used by the API and
//! persistence layers, and the services implementing the driving ports.
//! Domain types carry no serde contracts except [`Role`], whose wire names
//! also appear inside tokens.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable error identifier.
//! - User, Email, Role: credential records.
//! - Application and its parts: funding applications.
//! - AuthService, ApplicationService: driving port implementations.

pub mod application;
pub mod application_service;
pub mod auth;
pub mod auth_service;
pub mod error;
pub mod ports;
pub mod token;
pub mod trace_id;
pub mod user;

pub use self::application::{
    Application, ApplicationDetails, ApplicationId, ApplicationStatus, ApplicationValidationError,
    DEFAULT_APPLICATION_STATUS, MAX_YEARS_IN_OPERATION, NewApplication, newest_first,
};
pub use self::application_service::ApplicationService;
pub use self::auth::{
    AuthError, Credentials, CredentialsValidationError, LoginOutcome, SignupOutcome,
};
pub use self::auth_service::AuthService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::token::{BearerToken, TokenClaims};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, HashedPassword, Role, User, UserId, UserValidationError};

