//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn sample_user() -> User {
    User::new(
        UserId::new(VALID_ID).expect("valid id"),
        Email::new("sme1@test.com").expect("valid email"),
        HashedPassword::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
        Role::Sme,
        DateTime::<Utc>::UNIX_EPOCH,
    )
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_round_trips_through_display() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn email_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(Email::new(raw), Err(UserValidationError::EmptyEmail));
}

#[rstest]
fn email_is_case_sensitive() {
    let lower = Email::new("ada@example.com").expect("valid email");
    let mixed = Email::new("Ada@Example.com").expect("valid email");
    assert_ne!(lower, mixed);
}

#[rstest]
#[case("SME", Role::Sme)]
#[case("INVESTOR", Role::Investor)]
fn role_parses_canonical_names(#[case] raw: &str, #[case] expected: Role) {
    let role: Role = raw.parse().expect("known role");
    assert_eq!(role, expected);
    assert_eq!(role.as_str(), raw);
}

#[rstest]
#[case("sme")]
#[case("ADMIN")]
#[case("")]
fn role_rejects_unknown_names(#[case] raw: &str) {
    let err = raw.parse::<Role>().expect_err("unknown role");
    assert_eq!(
        err,
        UserValidationError::UnknownRole {
            value: raw.to_owned()
        }
    );
}

#[rstest]
fn role_serialises_as_upper_case() {
    let value = serde_json::to_value(Role::Investor).expect("serialise role");
    assert_eq!(value, serde_json::json!("INVESTOR"));
}

#[rstest]
fn debug_output_redacts_password_hash(sample_user: User) {
    let rendered = format!("{sample_user:?}");
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("argon2id"));
}

#[rstest]
fn accessors_expose_components(sample_user: User) {
    assert_eq!(sample_user.id().to_string(), VALID_ID);
    assert_eq!(sample_user.email().as_ref(), "sme1@test.com");
    assert_eq!(sample_user.role(), Role::Sme);
    assert_eq!(sample_user.created_at(), DateTime::<Utc>::UNIX_EPOCH);
}
