mod support;

use santa_core::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use santa_core::repos::players;
use santa_core::services::players as registration;
use santa_core::{with_txn, GameFlowService, RegistrationStep};

use support::{register_ready, test_db};

#[tokio::test]
async fn enrolling_creates_a_blank_player_once() {
    let db = test_db().await;

    let first = registration::ensure_enrolled(&db, 11, Some("alice"))
        .await
        .expect("enroll");
    assert!(first.created);
    assert_eq!(first.player.registration_step(), RegistrationStep::New);
    assert_eq!(first.player.username.as_deref(), Some("alice"));

    let second = registration::ensure_enrolled(&db, 11, Some("alice2"))
        .await
        .expect("re-enroll");
    assert!(!second.created);
    assert_eq!(second.player.id, first.player.id);
    // The display hint is captured at creation and not rewritten.
    assert_eq!(second.player.username.as_deref(), Some("alice"));
}

#[tokio::test]
async fn name_then_wish_reaches_ready() {
    let db = test_db().await;
    registration::ensure_enrolled(&db, 21, None).await.expect("enroll");

    let named = registration::submit_name(&db, 21, "  Grace Hopper  ")
        .await
        .expect("name");
    assert_eq!(named.full_name.as_deref(), Some("Grace Hopper"));
    assert_eq!(named.registration_step(), RegistrationStep::NameSet);

    let ready = registration::submit_wish(&db, 21, " a compiler ")
        .await
        .expect("wish");
    assert_eq!(ready.wish.as_deref(), Some("a compiler"));
    assert_eq!(ready.registration_step(), RegistrationStep::Ready);
}

#[tokio::test]
async fn wish_before_name_is_rejected() {
    let db = test_db().await;
    registration::ensure_enrolled(&db, 31, None).await.expect("enroll");

    let result = registration::submit_wish(&db, 31, "anything").await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(
            ValidationKind::RegistrationIncomplete,
            _
        ))
    ));

    let player = players::require_by_chat_id(&db, 31).await.expect("player");
    assert_eq!(player.registration_step(), RegistrationStep::New);
    assert_eq!(player.wish, None);
}

#[tokio::test]
async fn invalid_input_never_advances_state() {
    let db = test_db().await;
    registration::ensure_enrolled(&db, 41, None).await.expect("enroll");

    let result = registration::submit_name(&db, 41, "   \t ").await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationKind::EmptyInput, _))
    ));

    let result = registration::submit_name(&db, 41, "/start").await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationKind::CommandInput, _))
    ));

    let player = players::require_by_chat_id(&db, 41).await.expect("player");
    assert_eq!(player.registration_step(), RegistrationStep::New);
}

#[tokio::test]
async fn name_for_an_unknown_chat_id_is_not_found() {
    let db = test_db().await;

    let result = registration::submit_name(&db, 51, "Nobody").await;
    assert!(matches!(
        result,
        Err(DomainError::NotFound(NotFoundKind::Player, _))
    ));
}

#[tokio::test]
async fn closed_registration_rejects_progress_but_keeps_queries() {
    let db = test_db().await;
    register_ready(&db, 61, "Alice", "tea").await;
    register_ready(&db, 62, "Bob", "coffee").await;
    registration::ensure_enrolled(&db, 63, None).await.expect("enroll");
    registration::submit_name(&db, 63, "Late Larry").await.expect("name");

    let svc = GameFlowService;
    with_txn(&db, |txn| Box::pin(async move { svc.run_draw(txn).await }))
        .await
        .expect("draw over the two ready players");

    // A participant who never reached READY is locked out of this round.
    let result = registration::submit_wish(&db, 63, "too late").await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationKind::RegistrationClosed, _))
    ));

    // Unknown chat ids are rejected without creating a row.
    let result = registration::ensure_enrolled(&db, 64, None).await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationKind::RegistrationClosed, _))
    ));
    assert_eq!(players::find_by_chat_id(&db, 64).await.expect("query"), None);

    // Known players may still enter to look at their assignment.
    let outcome = registration::ensure_enrolled(&db, 61, None)
        .await
        .expect("known player");
    assert!(!outcome.created);
    assert!(outcome.status.pairs_assigned);
}

#[tokio::test]
async fn reveal_assignment_respects_all_preconditions() {
    let db = test_db().await;
    register_ready(&db, 71, "Alice", "tea").await;
    register_ready(&db, 72, "Bob", "coffee").await;
    registration::ensure_enrolled(&db, 73, None).await.expect("enroll");
    registration::submit_name(&db, 73, "Name Only").await.expect("name");

    let svc = GameFlowService;

    // Unknown player.
    let result = svc.reveal_assignment(&db, 99).await;
    assert!(matches!(
        result,
        Err(DomainError::NotFound(NotFoundKind::Player, _))
    ));

    // Ready player, but the draw has not happened yet.
    let result = svc.reveal_assignment(&db, 71).await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationKind::DrawNotRun, _))
    ));

    with_txn(&db, |txn| Box::pin(async move { svc.run_draw(txn).await }))
        .await
        .expect("draw");

    // Incomplete registration is reported even after the draw.
    let svc = GameFlowService;
    let result = svc.reveal_assignment(&db, 73).await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(
            ValidationKind::RegistrationIncomplete,
            _
        ))
    ));

    // The two ready players see each other.
    let alice = svc.reveal_assignment(&db, 71).await.expect("assignment");
    assert_eq!(alice.recipient.full_name.as_deref(), Some("Bob"));
    assert_eq!(alice.recipient.wish.as_deref(), Some("coffee"));

    let bob = svc.reveal_assignment(&db, 72).await.expect("assignment");
    assert_eq!(bob.recipient.full_name.as_deref(), Some("Alice"));
}

#[tokio::test]
async fn wish_can_be_updated_while_registration_is_open() {
    let db = test_db().await;
    register_ready(&db, 81, "Alice", "tea").await;

    let updated = registration::submit_wish(&db, 81, "green tea")
        .await
        .expect("update wish");
    assert_eq!(updated.wish.as_deref(), Some("green tea"));
    assert_eq!(updated.registration_step(), RegistrationStep::Ready);
}
