//! Funding application handlers.
//!
//! ```text
//! POST /api/applications {"amount":50000,"purpose":"Equipment",...}
//! GET  /api/applications
//! GET  /api/applications/{id}
//! ```
//!
//! Monetary fields travel as JSON numbers and keep every decimal digit in
//! both directions; they never pass through `f64`. Free-text fields may be
//! omitted or `null` and are stored as empty strings.

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Application, ApplicationDetails, ApplicationStatus, NewApplication};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_application_id};

/// Request body for `POST /api/applications`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 50000.0)]
    pub amount: Decimal,
    #[serde(default)]
    #[schema(example = "Equipment purchase")]
    pub purpose: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    pub years_in_operation: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 250000.0)]
    pub annual_revenue: Decimal,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Defaults to `Under Review` when absent or blank.
    #[serde(default)]
    pub status: Option<String>,
}

impl From<ApplicationRequest> for NewApplication {
    fn from(value: ApplicationRequest) -> Self {
        Self {
            status: value
                .status
                .as_deref()
                .and_then(ApplicationStatus::from_input),
            details: ApplicationDetails {
                amount: value.amount,
                purpose: value.purpose.unwrap_or_default(),
                company_name: value.company_name.unwrap_or_default(),
                owner_name: value.owner_name.unwrap_or_default(),
                years_in_operation: value.years_in_operation,
                annual_revenue: value.annual_revenue,
                contact_number: value.contact_number.unwrap_or_default(),
                business_type: value.business_type.unwrap_or_default(),
                location: value.location.unwrap_or_default(),
            },
        }
    }
}

/// A stored application as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    #[schema(value_type = String, format = Uuid)]
    pub id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
    pub purpose: String,
    pub company_name: String,
    pub owner_name: String,
    pub years_in_operation: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub annual_revenue: Decimal,
    pub contact_number: String,
    pub business_type: String,
    pub location: String,
    #[schema(example = "Under Review")]
    pub status: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        let id = value.id().to_string();
        let status = value.status().as_ref().to_owned();
        let created_at = value.created_at();
        let ApplicationDetails {
            amount,
            purpose,
            company_name,
            owner_name,
            years_in_operation,
            annual_revenue,
            contact_number,
            business_type,
            location,
        } = value.details().clone();
        Self {
            id,
            amount,
            purpose,
            company_name,
            owner_name,
            years_in_operation,
            annual_revenue,
            contact_number,
            business_type,
            location,
            status,
            created_at,
        }
    }
}

/// Submit a funding application.
#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = ApplicationRequest,
    responses(
        (status = 201, description = "Application stored", body = ApplicationResponse),
        (status = 400, description = "Malformed or negative values", body = ErrorBody),
        (status = 500, description = "Error creating application", body = ErrorBody)
    ),
    tags = ["applications"],
    operation_id = "submitApplication",
    security([])
)]
#[post("/applications")]
pub async fn submit_application(
    state: web::Data<HttpState>,
    payload: web::Json<ApplicationRequest>,
) -> ApiResult<HttpResponse> {
    let stored = state
        .applications
        .submit(payload.into_inner().into())
        .await
        .map_err(|err| {
            if err.code().is_server_fault() {
                err.with_public_message("Error creating application")
            } else {
                err
            }
        })?;
    Ok(HttpResponse::Created().json(ApplicationResponse::from(stored)))
}

/// List every application, newest first.
#[utoipa::path(
    get,
    path = "/api/applications",
    responses(
        (status = 200, description = "Applications, newest first", body = [ApplicationResponse]),
        (status = 500, description = "Error fetching applications", body = ErrorBody)
    ),
    tags = ["applications"],
    operation_id = "listApplications",
    security([])
)]
#[get("/applications")]
pub async fn list_applications(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ApplicationResponse>>> {
    let applications = state
        .applications_query
        .list_all()
        .await
        .map_err(|err| err.with_public_message("Error fetching applications"))?;
    Ok(web::Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// Fetch one application.
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(("id" = String, Path, description = "Application UUID")),
    responses(
        (status = 200, description = "Application", body = ApplicationResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such application", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["applications"],
    operation_id = "getApplication",
    security([])
)]
#[get("/applications/{id}")]
pub async fn get_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApplicationResponse>> {
    let id = parse_application_id(&path.into_inner(), FieldName::new("id"))?;
    let application = state.applications_query.find_by_id(&id).await?;
    Ok(web::Json(application.into()))
}

#[cfg(test)]
#[path = "applications_tests.rs"]
mod tests;
