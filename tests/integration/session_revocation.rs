//! Logout, logout-all, and login flow tests.

use quizhub_auth::directory::UserDirectory;
use quizhub_auth::error::AuthError;
use quizhub_auth::revocation::RevocationStore;
use quizhub_auth::session::LogoutOutcome;

use crate::helpers::{DEFAULT_WINDOW_SECS, TestStack, at};

#[tokio::test]
async fn logout_makes_the_token_unvalidatable() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let issued = stack.issuer.issue("alice", false, at(0)).await.unwrap();
    let outcome = stack.service.logout(&issued.token, at(10)).await.unwrap();
    assert_eq!(outcome, LogoutOutcome::Revoked);

    let err = stack
        .validator
        .validate(&issued.token, at(11))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Revoked));
}

#[tokio::test]
async fn logout_twice_is_idempotent() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let issued = stack.issuer.issue("alice", false, at(0)).await.unwrap();
    assert_eq!(
        stack.service.logout(&issued.token, at(10)).await.unwrap(),
        LogoutOutcome::Revoked
    );
    assert_eq!(
        stack.service.logout(&issued.token, at(20)).await.unwrap(),
        LogoutOutcome::AlreadyRevoked
    );

    // Still exactly one record, with the refreshed revocation time.
    assert_eq!(stack.revocations.len().await, 1);
    let records = stack
        .revocations
        .list_active(issued_user(&stack).await, at(20))
        .await
        .unwrap();
    assert_eq!(records[0].revoked_at, at(20));
}

#[tokio::test]
async fn logout_of_an_expired_token_is_a_harmless_noop() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let issued = stack.issuer.issue("alice", false, at(0)).await.unwrap();

    // Past expiry, with a jti the store has never seen.
    let outcome = stack
        .service
        .logout(&issued.token, at(DEFAULT_WINDOW_SECS + 5))
        .await
        .unwrap();
    assert_eq!(outcome, LogoutOutcome::Expired);
    assert!(stack.revocations.is_empty().await);
}

#[tokio::test]
async fn logout_of_a_malformed_token_is_rejected() {
    let stack = TestStack::new();

    let err = stack.service.logout("not-a-token", at(0)).await.unwrap_err();
    assert!(matches!(err, AuthError::Malformed));
}

#[tokio::test]
async fn logout_all_invalidates_older_tokens_but_not_newer_ones() {
    let stack = TestStack::new();
    let user_id = stack.create_user("alice", "pw-Secret-77").await;

    // Token A issued at t=10, logout-all at t=20.
    let token_a = stack.issuer.issue("alice", false, at(10)).await.unwrap();
    stack.service.logout_all(user_id, at(20)).await.unwrap();

    let err = stack
        .validator
        .validate(&token_a.token, at(25))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Revoked));

    // A remember-me token from another device, also predating the cutoff.
    let old_remembered = stack.issuer.issue("alice", true, at(5)).await.unwrap();
    let err = stack
        .validator
        .validate(&old_remembered.token, at(25))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Revoked));

    // Logging in again at t=21 produces a working token.
    let login = stack
        .manager
        .login("alice", "pw-Secret-77", false, at(21))
        .await
        .unwrap();
    let claims = stack
        .validator
        .validate(&login.token.access_token, at(25))
        .await
        .unwrap();
    assert_eq!(claims.iat, 21);
}

#[tokio::test]
async fn token_issued_exactly_at_the_cutoff_still_validates() {
    let stack = TestStack::new();
    let user_id = stack.create_user("alice", "pw-Secret-77").await;

    stack.service.logout_all(user_id, at(20)).await.unwrap();

    let issued = stack.issuer.issue("alice", false, at(20)).await.unwrap();
    assert!(stack.validator.validate(&issued.token, at(21)).await.is_ok());
}

#[tokio::test]
async fn revoke_all_tracked_skips_malformed_and_expired_entries() {
    let stack = TestStack::new();
    let user_id = stack.create_user("alice", "pw-Secret-77").await;

    let live_a = stack.issuer.issue("alice", false, at(100)).await.unwrap();
    let live_b = stack.issuer.issue("alice", true, at(100)).await.unwrap();
    let expired = stack.issuer.issue("alice", false, at(0)).await.unwrap();

    let tokens = vec![
        live_a.token.clone(),
        "garbage".to_string(),
        expired.token.clone(),
        live_b.token.clone(),
    ];

    let revoked = stack
        .service
        .revoke_all_tracked(user_id, &tokens, at(DEFAULT_WINDOW_SECS + 50))
        .await
        .unwrap();

    assert_eq!(revoked, 2);
    assert!(stack.revocations.is_revoked(live_a.claims.jti).await.unwrap());
    assert!(stack.revocations.is_revoked(live_b.claims.jti).await.unwrap());
    assert!(!stack.revocations.is_revoked(expired.claims.jti).await.unwrap());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let wrong_password = stack
        .manager
        .login("alice", "wrong", false, at(0))
        .await
        .unwrap_err();
    let unknown_user = stack
        .manager
        .login("nobody", "pw-Secret-77", false, at(0))
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_user, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn inactive_account_cannot_log_in() {
    let stack = TestStack::new();
    let user_id = stack.create_user("alice", "pw-Secret-77").await;

    let mut user = stack.directory.remove(user_id).await.unwrap();
    user.status = quizhub_entity::user::UserStatus::Inactive;
    stack.directory.insert(user).await;

    let err = stack
        .manager
        .login("alice", "pw-Secret-77", false, at(0))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn future_cutoff_suspends_login_until_it_elapses() {
    let stack = TestStack::new();
    let user_id = stack.create_user("alice", "pw-Secret-77").await;

    stack.service.logout_all(user_id, at(100)).await.unwrap();

    // Before the cutoff elapses, login is suspended.
    let err = stack
        .manager
        .login("alice", "pw-Secret-77", false, at(50))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::SessionsSuspended { .. }));

    // Once it has passed, login succeeds and the cutoff is cleared.
    let result = stack
        .manager
        .login("alice", "pw-Secret-77", false, at(150))
        .await
        .unwrap();
    assert!(result.user.token_blocklist_date.is_none());

    let stored = stack.directory.find_by_id(user_id).await.unwrap().unwrap();
    assert!(stored.token_blocklist_date.is_none());
}

#[tokio::test]
async fn cutoff_equal_to_now_allows_login_and_clears() {
    let stack = TestStack::new();
    let user_id = stack.create_user("alice", "pw-Secret-77").await;

    stack.service.logout_all(user_id, at(100)).await.unwrap();

    let result = stack
        .manager
        .login("alice", "pw-Secret-77", false, at(100))
        .await
        .unwrap();
    assert!(result.user.token_blocklist_date.is_none());
}

/// Resolve alice's user ID from the directory.
async fn issued_user(stack: &TestStack) -> uuid::Uuid {
    stack
        .directory
        .find_by_username("alice")
        .await
        .unwrap()
        .unwrap()
        .id
}
