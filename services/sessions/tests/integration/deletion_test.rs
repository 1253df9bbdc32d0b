use huddle_domain::pagination::{PageRequest, Sort};
use huddle_sessions::domain::repository::{
    ActionItemRepository as _, MemberRepository as _, NewStory, SessionRepository as _,
    StoryRepository as _, UserRepository as _,
};
use huddle_sessions::error::SessionsServiceError;

use crate::helpers::{create_session, create_user, setup_state};

#[tokio::test]
async fn should_keep_session_with_null_owner_after_owner_deleted() {
    let state = setup_state().await;
    let owner = create_user(&state, "owner@example.com").await;
    let session = create_session(&state, &owner, "sprint retro").await;

    // The owner's roster row would block the delete, so leave first.
    assert!(
        state
            .member_repo()
            .remove(session.id, owner.id)
            .await
            .unwrap()
    );
    state.user_repo().delete(owner.id).await.unwrap();

    let survivor = state
        .session_repo()
        .find_by_id(session.id)
        .await
        .unwrap()
        .expect("session survives its owner");
    assert_eq!(survivor.owner_id, None);
    assert_eq!(survivor.title, "sprint retro");
}

#[tokio::test]
async fn should_refuse_user_delete_while_on_a_roster() {
    let state = setup_state().await;
    let owner = create_user(&state, "owner@example.com").await;
    let session = create_session(&state, &owner, "sprint retro").await;

    let result = state.user_repo().delete(owner.id).await;
    assert!(
        matches!(result, Err(SessionsServiceError::UserInUse)),
        "expected UserInUse, got {result:?}"
    );

    // Neither the account nor the roster row was touched.
    assert!(
        state
            .user_repo()
            .find_by_id(owner.id)
            .await
            .unwrap()
            .is_some()
    );
    let roster = state
        .member_repo()
        .list_by_session(session.id, Sort::Asc, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(roster.len(), 1);
}

#[tokio::test]
async fn should_refuse_user_delete_while_owning_action_items() {
    let state = setup_state().await;
    let owner = create_user(&state, "owner@example.com").await;
    let author = create_user(&state, "author@example.com").await;
    let session = create_session(&state, &owner, "sprint retro").await;

    state.member_repo().add(session.id, author.id).await.unwrap();
    let item = state
        .action_item_repo()
        .create(session.id, author.id, "rotate the pager schedule")
        .await
        .unwrap();
    state
        .member_repo()
        .remove(session.id, author.id)
        .await
        .unwrap();

    // Off the roster, but the action item still pins the account.
    let result = state.user_repo().delete(author.id).await;
    assert!(matches!(result, Err(SessionsServiceError::UserInUse)));

    assert!(state.action_item_repo().delete(item.id).await.unwrap());
    state.user_repo().delete(author.id).await.unwrap();
}

#[tokio::test]
async fn should_remove_everything_inside_a_deleted_session() {
    let state = setup_state().await;
    let owner = create_user(&state, "owner@example.com").await;
    let session = create_session(&state, &owner, "planning").await;

    let item = state
        .action_item_repo()
        .create(session.id, owner.id, "split the login epic")
        .await
        .unwrap();
    let story = state
        .story_repo()
        .create(&NewStory {
            session_id: session.id,
            title: "login flow".to_owned(),
            description: None,
            story_points: 5,
        })
        .await
        .unwrap();

    state.session_repo().delete_cascade(session.id).await.unwrap();

    assert!(
        state
            .session_repo()
            .find_by_id(session.id)
            .await
            .unwrap()
            .is_none()
    );
    // Stories go through the storage-level cascade, the rest through the
    // transactional delete.
    assert!(
        state
            .story_repo()
            .find_by_id(story.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        state
            .action_item_repo()
            .find_by_id(item.id)
            .await
            .unwrap()
            .is_none()
    );
    let roster = state
        .member_repo()
        .list_by_session(session.id, Sort::Asc, PageRequest::default())
        .await
        .unwrap();
    assert!(roster.is_empty());

    // The owner account itself is untouched.
    assert!(
        state
            .user_repo()
            .find_by_id(owner.id)
            .await
            .unwrap()
            .is_some()
    );
}
