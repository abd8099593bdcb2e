//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Credential records. `email` carries a UNIQUE constraint.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        password_hash -> Text,
        /// `SME` or `INVESTOR`.
        role -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Funding applications.
    applications (id) {
        id -> Uuid,
        amount -> Numeric,
        purpose -> Text,
        /// Free-text workflow label.
        status -> Text,
        company_name -> Text,
        owner_name -> Text,
        years_in_operation -> Int4,
        annual_revenue -> Numeric,
        contact_number -> Text,
        business_type -> Text,
        location -> Text,
        /// Server-assigned submission time.
        created_at -> Timestamptz,
    }
}
