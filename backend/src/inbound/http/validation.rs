//! Shared validation helpers for inbound HTTP adapters.
//!
//! Details attached here never reach the response body; they ride along on
//! the domain error for logging.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::debug;

use crate::domain::{ApplicationId, Error};

/// Validation error codes recorded in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidUuid,
    InvalidBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ValidationCode::InvalidUuid.as_str(),
    }))
}

pub(crate) fn parse_application_id(value: &str, field: FieldName) -> Result<ApplicationId, Error> {
    ApplicationId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

/// Describe a body deserialisation failure without echoing raw input.
fn describe_payload_error(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) if inner.is_data() => {
            format!("Invalid request body: {inner}")
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large".to_owned()
        }
        _ => "Request body must be valid JSON".to_owned(),
    }
}

/// `JsonConfig` error handler turning extractor failures into 400 `{message}`
/// responses that carry the trace id.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "rejected request body");
    let message = describe_payload_error(&err);
    Error::invalid_request(message)
        .with_details(json!({ "code": ValidationCode::InvalidBody.as_str() }))
        .into()
}
