//! Funding application model.
//!
//! Applications are free-form requests submitted by SMEs. The only behaviour
//! the domain owns is default assignment at submission (status and creation
//! timestamp) and validation of the numeric fields.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Status assigned to applications submitted without one.
pub const DEFAULT_APPLICATION_STATUS: &str = "Under Review";

/// Largest accepted `years_in_operation`; stored as a 32-bit signed integer.
pub const MAX_YEARS_IN_OPERATION: u32 = i32::MAX.unsigned_abs();

/// Validation errors returned by the application constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationValidationError {
    /// The identifier is not a UUID.
    InvalidId,
    /// `amount` is below zero.
    NegativeAmount,
    /// `annual_revenue` is below zero.
    NegativeAnnualRevenue,
    /// `years_in_operation` exceeds [`MAX_YEARS_IN_OPERATION`].
    YearsInOperationOutOfRange,
}

impl fmt::Display for ApplicationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "application id must be a valid UUID"),
            Self::NegativeAmount => write!(f, "amount must not be negative"),
            Self::NegativeAnnualRevenue => write!(f, "annual revenue must not be negative"),
            Self::YearsInOperationOutOfRange => write!(
                f,
                "years in operation must not exceed {MAX_YEARS_IN_OPERATION}"
            ),
        }
    }
}

impl std::error::Error for ApplicationValidationError {}

/// Opaque application identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationId(Uuid);

impl ApplicationId {
    /// Parse an identifier supplied by a caller.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ApplicationValidationError> {
        Uuid::parse_str(id.as_ref().trim())
            .map(Self)
            .map_err(|_| ApplicationValidationError::InvalidId)
    }

    /// Wrap an existing UUID, typically read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text workflow label. No transition set is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationStatus(String);

impl ApplicationStatus {
    /// Build a status from caller input; blank input yields `None` so the
    /// default applies.
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Wrap a status read back from storage verbatim.
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        Self(DEFAULT_APPLICATION_STATUS.to_owned())
    }
}

impl AsRef<str> for ApplicationStatus {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Business attributes supplied by the applicant.
///
/// ## Invariants
/// - `amount` and `annual_revenue` are non-negative and
///   `years_in_operation` is at most [`MAX_YEARS_IN_OPERATION`] (checked by
///   [`ApplicationDetails::validate`]).
/// - Free-text fields are unconstrained and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDetails {
    pub amount: Decimal,
    pub purpose: String,
    pub company_name: String,
    pub owner_name: String,
    pub years_in_operation: u32,
    pub annual_revenue: Decimal,
    pub contact_number: String,
    pub business_type: String,
    pub location: String,
}

impl ApplicationDetails {
    /// Check the monetary fields are non-negative and the operating years
    /// fit storage.
    pub fn validate(self) -> Result<Self, ApplicationValidationError> {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(ApplicationValidationError::NegativeAmount);
        }
        if self.annual_revenue.is_sign_negative() && !self.annual_revenue.is_zero() {
            return Err(ApplicationValidationError::NegativeAnnualRevenue);
        }
        if self.years_in_operation > MAX_YEARS_IN_OPERATION {
            return Err(ApplicationValidationError::YearsInOperationOutOfRange);
        }
        Ok(self)
    }
}

/// Submission payload before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub details: ApplicationDetails,
    pub status: Option<ApplicationStatus>,
}

/// Stored funding application.
///
/// ## Invariants
/// - `created_at` is set once at submission and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    id: ApplicationId,
    details: ApplicationDetails,
    status: ApplicationStatus,
    created_at: DateTime<Utc>,
}

impl Application {
    /// Assemble an application from stored or freshly defaulted parts.
    pub fn from_parts(
        id: ApplicationId,
        details: ApplicationDetails,
        status: ApplicationStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            status,
            created_at,
        }
    }

    /// Apply submission defaults to a new application.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Application, ApplicationDetails, NewApplication};
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let details = ApplicationDetails {
    ///     amount: Decimal::new(50_000, 0),
    ///     purpose: "Working capital".into(),
    ///     company_name: "Acme Ltd".into(),
    ///     owner_name: "Ada".into(),
    ///     years_in_operation: 3,
    ///     annual_revenue: Decimal::new(250_000, 0),
    ///     contact_number: "555-0100".into(),
    ///     business_type: "Retail".into(),
    ///     location: "Leeds".into(),
    /// };
    /// let app = Application::submitted(NewApplication { details, status: None }, Utc::now());
    /// assert_eq!(app.status().as_ref(), "Under Review");
    /// ```
    pub fn submitted(new: NewApplication, created_at: DateTime<Utc>) -> Self {
        let NewApplication { details, status } = new;
        Self::from_parts(
            ApplicationId::random(),
            details,
            status.unwrap_or_default(),
            created_at,
        )
    }

    /// Server-assigned identifier.
    pub fn id(&self) -> &ApplicationId {
        &self.id
    }

    /// Applicant-supplied attributes.
    pub fn details(&self) -> &ApplicationDetails {
        &self.details
    }

    /// Current workflow label.
    pub fn status(&self) -> &ApplicationStatus {
        &self.status
    }

    /// Submission time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Newest-first ordering used by every listing; ties fall back to id so the
/// order is total.
pub fn newest_first(left: &Application, right: &Application) -> std::cmp::Ordering {
    right
        .created_at
        .cmp(&left.created_at)
        .then_with(|| right.id.cmp(&left.id))
}
