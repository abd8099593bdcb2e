//! PostgreSQL-backed `ApplicationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ApplicationRepository, ApplicationRepositoryError};
use crate::domain::{Application, ApplicationDetails, ApplicationId, ApplicationStatus};

use super::diesel_basic_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{ApplicationRow, NewApplicationRow};
use super::pool::{DbPool, PoolError};
use super::schema::applications;

/// Diesel-backed implementation of the [`ApplicationRepository`] port.
#[derive(Clone)]
pub struct DieselApplicationRepository {
    pool: DbPool,
}

impl DieselApplicationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ApplicationRepositoryError {
    ApplicationRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> ApplicationRepositoryError {
    match classify_diesel_error(&error) {
        (DieselFailure::Connection, message) => ApplicationRepositoryError::connection(message),
        (DieselFailure::UniqueViolation | DieselFailure::Query, message) => {
            ApplicationRepositoryError::query(message)
        }
    }
}

fn row_to_application(row: ApplicationRow) -> Result<Application, ApplicationRepositoryError> {
    let years_in_operation = u32::try_from(row.years_in_operation).map_err(|_| {
        ApplicationRepositoryError::query(format!(
            "negative years_in_operation in database: {}",
            row.years_in_operation
        ))
    })?;

    Ok(Application::from_parts(
        ApplicationId::from_uuid(row.id),
        ApplicationDetails {
            amount: row.amount,
            purpose: row.purpose,
            company_name: row.company_name,
            owner_name: row.owner_name,
            years_in_operation,
            annual_revenue: row.annual_revenue,
            contact_number: row.contact_number,
            business_type: row.business_type,
            location: row.location,
        },
        ApplicationStatus::from_stored(row.status),
        row.created_at,
    ))
}

#[async_trait]
impl ApplicationRepository for DieselApplicationRepository {
    async fn insert(&self, application: &Application) -> Result<(), ApplicationRepositoryError> {
        let details = application.details();
        let years_in_operation = i32::try_from(details.years_in_operation).map_err(|_| {
            ApplicationRepositoryError::query("years_in_operation exceeds storage range")
        })?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewApplicationRow {
            id: *application.id().as_uuid(),
            amount: details.amount,
            purpose: &details.purpose,
            status: application.status().as_ref(),
            company_name: &details.company_name,
            owner_name: &details.owner_name,
            years_in_operation,
            annual_revenue: details.annual_revenue,
            contact_number: &details.contact_number,
            business_type: &details.business_type,
            location: &details.location,
            created_at: application.created_at(),
        };

        diesel::insert_into(applications::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_newest_first(&self) -> Result<Vec<Application>, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ApplicationRow> = applications::table
            .order((applications::created_at.desc(), applications::id.desc()))
            .select(ApplicationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_application).collect()
    }

    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ApplicationRow> = applications::table
            .filter(applications::id.eq(id.as_uuid()))
            .select(ApplicationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_application).transpose()
    }
}
