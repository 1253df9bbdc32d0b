use huddle_sessions::domain::repository::{
    MemberRepository as _, NewUser, UserRepository as _,
};
use huddle_sessions::error::SessionsServiceError;

use crate::helpers::{create_session, create_user, setup_state};

#[tokio::test]
async fn should_reject_second_account_with_same_email() {
    let state = setup_state().await;
    create_user(&state, "jane@example.com").await;

    let result = state
        .user_repo()
        .create(&NewUser {
            email: "jane@example.com".to_owned(),
            username: "someone else".to_owned(),
            password_hash: "not-a-real-hash".to_owned(),
        })
        .await;
    assert!(
        matches!(result, Err(SessionsServiceError::EmailAlreadyExists)),
        "expected EmailAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_allow_same_display_name_on_different_accounts() {
    let state = setup_state().await;
    let first = create_user(&state, "first@example.com").await;
    let second = create_user(&state, "second@example.com").await;
    assert_eq!(first.username, second.username);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn should_reject_duplicate_roster_row() {
    let state = setup_state().await;
    let owner = create_user(&state, "owner@example.com").await;
    let session = create_session(&state, &owner, "sprint retro").await;

    // The owner was already enrolled at session creation.
    let result = state.member_repo().add(session.id, owner.id).await;
    assert!(
        matches!(result, Err(SessionsServiceError::AlreadyMember)),
        "expected AlreadyMember, got {result:?}"
    );
}
