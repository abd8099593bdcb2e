//! Diesel error mapping shared by the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse classification of a Diesel failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection dropped or could not be used.
    Connection,
    /// A UNIQUE constraint rejected the write.
    UniqueViolation,
    /// Any other query failure.
    Query,
}

/// Classify a Diesel error, logging the database detail at debug level.
///
/// Raw database messages stay in the log; callers only see the
/// classification and a fixed description.
pub(crate) fn classify_diesel_error(error: &DieselError) -> (DieselFailure, &'static str) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => (DieselFailure::Query, "record not found"),
        DieselError::QueryBuilderError(_) => (DieselFailure::Query, "database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            (DieselFailure::UniqueViolation, "unique constraint violated")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            (DieselFailure::Connection, "database connection error")
        }
        DieselError::DeserializationError(_) => {
            (DieselFailure::Query, "database row could not be decoded")
        }
        _ => (DieselFailure::Query, "database error"),
    }
}

/// Extract the message carried by a pool failure.
pub(crate) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct FixedInfo(&'static str);

    impl diesel::result::DatabaseErrorInformation for FixedInfo {
        fn message(&self) -> &str {
            self.0
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(FixedInfo("secret detail")))
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::UniqueViolation), DieselFailure::UniqueViolation)]
    #[case(database_error(DatabaseErrorKind::ClosedConnection), DieselFailure::Connection)]
    #[case(database_error(DatabaseErrorKind::ForeignKeyViolation), DieselFailure::Query)]
    #[case(DieselError::NotFound, DieselFailure::Query)]
    fn classifies_diesel_errors(#[case] error: DieselError, #[case] expected: DieselFailure) {
        let (failure, message) = classify_diesel_error(&error);
        assert_eq!(failure, expected);
        assert!(!message.contains("secret detail"));
    }

    #[rstest]
    fn pool_messages_are_preserved() {
        assert_eq!(pool_error_message(PoolError::checkout("timed out")), "timed out");
    }
}
