//! Issue → validate lifecycle tests.

use quizhub_auth::error::AuthError;

use crate::helpers::{DEFAULT_WINDOW_SECS, REMEMBER_ME_WINDOW_SECS, TestStack, at};

#[tokio::test]
async fn validate_after_issue_returns_matching_claims() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let issued = stack.issuer.issue("alice", false, at(1000)).await.unwrap();
    let claims = stack
        .validator
        .validate(&issued.token, at(1000))
        .await
        .unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.jti, issued.claims.jti);
    assert_eq!(claims.iat, 1000);
    assert_eq!(claims.exp, 1000 + DEFAULT_WINDOW_SECS);
    assert!(!claims.remember_me);
}

#[tokio::test]
async fn issuing_twice_at_the_same_instant_yields_distinct_jtis() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let a = stack.issuer.issue("alice", false, at(1000)).await.unwrap();
    let b = stack.issuer.issue("alice", false, at(1000)).await.unwrap();

    assert_ne!(a.claims.jti, b.claims.jti);
}

#[tokio::test]
async fn issue_for_unknown_subject_fails() {
    let stack = TestStack::new();

    let err = stack
        .issuer
        .issue("nobody", false, at(0))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UnknownSubject));
}

#[tokio::test]
async fn expired_token_reports_expired() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let issued = stack.issuer.issue("alice", false, at(0)).await.unwrap();

    // Valid at the exact expiry second, expired one second later.
    let at_exp = at(DEFAULT_WINDOW_SECS);
    assert!(stack.validator.validate(&issued.token, at_exp).await.is_ok());

    let err = stack
        .validator
        .validate(&issued.token, at(DEFAULT_WINDOW_SECS + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Expired));
}

#[tokio::test]
async fn expired_token_reports_expired_even_when_also_revoked() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let issued = stack.issuer.issue("alice", false, at(0)).await.unwrap();
    stack.service.logout(&issued.token, at(10)).await.unwrap();

    let err = stack
        .validator
        .validate(&issued.token, at(DEFAULT_WINDOW_SECS + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Expired));
}

#[tokio::test]
async fn remember_me_controls_the_expiry_window() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let short = stack.issuer.issue("alice", false, at(0)).await.unwrap();
    let long = stack.issuer.issue("alice", true, at(0)).await.unwrap();

    assert_eq!(short.claims.exp - short.claims.iat, DEFAULT_WINDOW_SECS);
    assert_eq!(long.claims.exp - long.claims.iat, REMEMBER_ME_WINDOW_SECS);
    assert!(long.claims.remember_me);
}

#[tokio::test]
async fn remember_me_token_outlives_the_default_window() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let long = stack.issuer.issue("alice", true, at(0)).await.unwrap();

    let past_default = at(DEFAULT_WINDOW_SECS + 1);
    let claims = stack
        .validator
        .validate(&long.token, past_default)
        .await
        .unwrap();
    assert!(claims.remember_me);
}

#[tokio::test]
async fn tampered_token_is_malformed() {
    let stack = TestStack::new();
    stack.create_user("alice", "pw-Secret-77").await;

    let issued = stack.issuer.issue("alice", false, at(0)).await.unwrap();

    // Flip a character in the payload segment.
    let mut parts: Vec<String> = issued.token.split('.').map(String::from).collect();
    parts[1] = format!("x{}", &parts[1][1..]);
    let tampered = parts.join(".");

    let err = stack
        .validator
        .validate(&tampered, at(0))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Malformed));

    let err = stack.validator.validate("garbage", at(0)).await.unwrap_err();
    assert!(matches!(err, AuthError::Malformed));
}

#[tokio::test]
async fn token_for_a_deleted_user_fails_unknown_subject() {
    let stack = TestStack::new();
    let user_id = stack.create_user("alice", "pw-Secret-77").await;

    let issued = stack.issuer.issue("alice", false, at(0)).await.unwrap();
    stack.directory.remove(user_id).await;

    let err = stack
        .validator
        .validate(&issued.token, at(1))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UnknownSubject));
}
