//! Tests for the auth service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockPasswordHasher, MockTokenIssuer, MockUserRepository};
use crate::domain::{BearerToken, Email, HashedPassword};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 15, 0)
        .single()
        .expect("valid fixture timestamp")
}

type TestService = AuthService<MockUserRepository, MockPasswordHasher, MockTokenIssuer>;

fn make_service(
    users: MockUserRepository,
    hasher: MockPasswordHasher,
    tokens: MockTokenIssuer,
) -> TestService {
    AuthService::new(
        Arc::new(users),
        Arc::new(hasher),
        Arc::new(tokens),
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        }),
    )
}

#[fixture]
fn credentials() -> Credentials {
    Credentials::try_from_parts("sme1@test.com", "pw123").expect("valid credentials")
}

fn stored_user(role: Role) -> User {
    User::new(
        UserId::random(),
        Email::new("sme1@test.com").expect("valid email"),
        HashedPassword::new("stored-hash"),
        role,
        fixture_timestamp(),
    )
}

#[rstest]
#[tokio::test]
async fn signup_hashes_password_and_stores_user(credentials: Credentials) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(None));
    users
        .expect_create()
        .withf(|user| {
            user.email().as_ref() == "sme1@test.com"
                && user.password_hash().as_ref() == "hashed:pw123"
                && user.role() == Role::Investor
                && user.created_at() == fixture_timestamp()
        })
        .times(1)
        .return_once(|_| Ok(()));

    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .withf(|password| password == "pw123")
        .times(1)
        .return_once(|password| Ok(HashedPassword::new(format!("hashed:{password}"))));

    let service = make_service(users, hasher, MockTokenIssuer::new());
    let outcome = service
        .signup(credentials, Role::Investor)
        .await
        .expect("signup succeeds");
    assert_eq!(outcome.role, Role::Investor);
}

#[rstest]
#[tokio::test]
async fn signup_rejects_existing_email_without_hashing(credentials: Credentials) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(Some(stored_user(Role::Sme))));
    users.expect_create().never();

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().never();

    let service = make_service(users, hasher, MockTokenIssuer::new());
    let err = service
        .signup(credentials, Role::Investor)
        .await
        .expect_err("duplicate email");
    assert_eq!(
        err,
        AuthError::DuplicateEmail {
            email: "sme1@test.com".to_owned()
        }
    );
}

#[rstest]
#[tokio::test]
async fn signup_surfaces_store_conflict_as_duplicate(credentials: Credentials) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().return_once(|_| Ok(None));
    users
        .expect_create()
        .return_once(|_| Err(UserPersistenceError::duplicate_email("sme1@test.com")));

    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .return_once(|_| Ok(HashedPassword::new("h")));

    let service = make_service(users, hasher, MockTokenIssuer::new());
    let err = service
        .signup(credentials, Role::Sme)
        .await
        .expect_err("conflict");
    assert!(matches!(err, AuthError::DuplicateEmail { .. }));
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), true)]
#[case(UserPersistenceError::query("syntax"), false)]
#[tokio::test]
async fn signup_maps_store_failures(
    credentials: Credentials,
    #[case] failure: UserPersistenceError,
    #[case] unavailable: bool,
) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(move |_| Err(failure));

    let service = make_service(users, MockPasswordHasher::new(), MockTokenIssuer::new());
    let err = service
        .signup(credentials, Role::Sme)
        .await
        .expect_err("store failure");
    assert!(err.is_infrastructure());
    assert_eq!(matches!(err, AuthError::Unavailable { .. }), unavailable);
}

#[rstest]
#[tokio::test]
async fn login_issues_token_for_matching_role(credentials: Credentials) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(|_| Ok(Some(stored_user(Role::Sme))));

    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .withf(|password, hash| password == "pw123" && hash.as_ref() == "stored-hash")
        .return_once(|_, _| true);

    let mut tokens = MockTokenIssuer::new();
    tokens
        .expect_issue()
        .withf(|subject, role, issued_at| {
            subject.as_ref() == "sme1@test.com"
                && *role == Role::Sme
                && *issued_at == fixture_timestamp()
        })
        .times(1)
        .return_once(|_, _, _| Ok(BearerToken::new("signed.token.value")));

    let service = make_service(users, hasher, tokens);
    let outcome = service
        .login(credentials, Role::Sme)
        .await
        .expect("login succeeds");
    assert_eq!(outcome.token.as_ref(), "signed.token.value");
    assert_eq!(outcome.role, Role::Sme);
}

#[rstest]
#[tokio::test]
async fn login_rejects_unknown_email(credentials: Credentials) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().return_once(|_| Ok(None));

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().never();

    let service = make_service(users, hasher, MockTokenIssuer::new());
    let err = service
        .login(credentials, Role::Sme)
        .await
        .expect_err("unknown email");
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[rstest]
#[tokio::test]
async fn login_checks_password_before_role(credentials: Credentials) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(|_| Ok(Some(stored_user(Role::Investor))));

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().return_once(|_, _| false);

    let mut tokens = MockTokenIssuer::new();
    tokens.expect_issue().never();

    let service = make_service(users, hasher, tokens);
    let err = service
        .login(credentials, Role::Sme)
        .await
        .expect_err("wrong password");
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[rstest]
#[tokio::test]
async fn login_rejects_role_mismatch_after_password_check(credentials: Credentials) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(|_| Ok(Some(stored_user(Role::Sme))));

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().times(1).return_once(|_, _| true);

    let mut tokens = MockTokenIssuer::new();
    tokens.expect_issue().never();

    let service = make_service(users, hasher, tokens);
    let err = service
        .login(credentials, Role::Investor)
        .await
        .expect_err("role mismatch");
    assert_eq!(
        err,
        AuthError::RoleMismatch {
            expected: Role::Investor,
            actual: Role::Sme
        }
    );
}

#[rstest]
#[tokio::test]
async fn hashing_runs_off_the_calling_thread(credentials: Credentials) {
    let caller = std::thread::current().id();
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().return_once(|_| Ok(None));
    users.expect_create().return_once(|_| Ok(()));

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(1).return_once(move |_| {
        assert_ne!(std::thread::current().id(), caller);
        Ok(HashedPassword::new("h"))
    });

    let service = make_service(users, hasher, MockTokenIssuer::new());
    service
        .signup(credentials, Role::Sme)
        .await
        .expect("signup succeeds");
}

#[rstest]
#[tokio::test]
async fn verification_runs_off_the_calling_thread(credentials: Credentials) {
    let caller = std::thread::current().id();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(|_| Ok(Some(stored_user(Role::Sme))));

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().times(1).return_once(move |_, _| {
        std::thread::current().id() != caller
    });

    // A verified password surfaces as the role mismatch; a password checked
    // on the caller's thread would fail as invalid credentials instead.
    let service = make_service(users, hasher, MockTokenIssuer::new());
    let err = service
        .login(credentials, Role::Investor)
        .await
        .expect_err("role mismatch");
    assert!(matches!(err, AuthError::RoleMismatch { .. }));
}

#[rstest]
#[tokio::test]
async fn login_maps_token_failures(credentials: Credentials) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(|_| Ok(Some(stored_user(Role::Sme))));

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().return_once(|_, _| true);

    let mut tokens = MockTokenIssuer::new();
    tokens
        .expect_issue()
        .return_once(|_, _, _| Err(TokenError::issue("bad key")));

    let service = make_service(users, hasher, tokens);
    let err = service
        .login(credentials, Role::Sme)
        .await
        .expect_err("token failure");
    assert!(matches!(err, AuthError::TokenIssue { .. }));
    assert!(err.is_infrastructure());
}
