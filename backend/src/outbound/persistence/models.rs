//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::schema::{applications, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Application models
// ---------------------------------------------------------------------------

/// Row struct for reading from the applications table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ApplicationRow {
    pub id: Uuid,
    pub amount: Decimal,
    pub purpose: String,
    pub status: String,
    pub company_name: String,
    pub owner_name: String,
    pub years_in_operation: i32,
    pub annual_revenue: Decimal,
    pub contact_number: String,
    pub business_type: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new application records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = applications)]
pub(crate) struct NewApplicationRow<'a> {
    pub id: Uuid,
    pub amount: Decimal,
    pub purpose: &'a str,
    pub status: &'a str,
    pub company_name: &'a str,
    pub owner_name: &'a str,
    pub years_in_operation: i32,
    pub annual_revenue: Decimal,
    pub contact_number: &'a str,
    pub business_type: &'a str,
    pub location: &'a str,
    pub created_at: DateTime<Utc>,
}
