mod common;

use common::{customer_store, memory};
use merch_storefront_api::{
    error::AppError,
    lifecycle::{
        notifications,
        requests::{self, NewRequest},
    },
    models::Placement,
    status::{RequestStatus, TransitionPolicy, check_request_transition},
    store::UserStore,
};

fn design() -> NewRequest {
    NewRequest {
        customer_name: "Ada".into(),
        color: "White".into(),
        size: "L".into(),
        placement: Placement::Front,
        description: "Small logo on the chest".into(),
        image_url: Some("  ".into()),
    }
}

#[tokio::test]
async fn submitted_request_starts_new_with_history() {
    let storage = memory();
    let (user_id, store) = customer_store(&storage);

    let request = requests::submit_request(&store, design()).await.unwrap();

    assert_eq!(request.status, RequestStatus::New);
    assert_eq!(request.user_id, user_id);
    assert_eq!(request.history.len(), 1);
    assert!(request.image_url.is_none());
    assert_eq!(requests::list_my_requests(&store).await.unwrap().len(), 1);
}

#[tokio::test]
async fn blank_description_is_rejected() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let mut new = design();
    new.description = "   ".into();

    let err = requests::submit_request(&store, new).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn signed_out_visitor_cannot_submit() {
    let storage = memory();
    let store = UserStore::anonymous(storage);

    let err = requests::submit_request(&store, design()).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn approval_needs_a_preview_first() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let request = requests::submit_request(&store, design()).await.unwrap();

    let err = requests::approve(&store, request.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    let unchanged = requests::get_my_request(&store, request.id).await.unwrap();
    assert_eq!(unchanged.status, RequestStatus::New);
}

#[tokio::test]
async fn preview_then_approve() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let request = requests::submit_request(&store, design()).await.unwrap();

    let previewed = requests::upload_preview(
        storage.clone(),
        TransitionPolicy::Enforce,
        request.id,
        "https://img.test/preview.png",
    )
    .await
    .unwrap();
    assert_eq!(previewed.status, RequestStatus::PreviewSent);
    assert_eq!(
        previewed.preview_image_url.as_deref(),
        Some("https://img.test/preview.png")
    );
    assert_eq!(notifications::unread_count(&store).await.unwrap(), 1);

    let approved = requests::approve(&store, request.id).await.unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);
    assert_eq!(approved.history.len(), 3);
}

#[tokio::test]
async fn requesting_changes_goes_back_to_the_designer() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let request = requests::submit_request(&store, design()).await.unwrap();
    requests::upload_preview(
        storage.clone(),
        TransitionPolicy::Enforce,
        request.id,
        "https://img.test/preview.png",
    )
    .await
    .unwrap();

    let err = requests::request_changes(&store, request.id, " ").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let changed = requests::request_changes(&store, request.id, "Make the logo bigger")
        .await
        .unwrap();
    assert_eq!(changed.status, RequestStatus::InProgress);
    let last = changed.history.last().unwrap();
    assert_eq!(last.status, RequestStatus::InProgress);
    assert_eq!(last.note.as_deref(), Some("Make the logo bigger"));
}

#[tokio::test]
async fn admin_listing_filters_by_status() {
    let storage = memory();
    let (_, alice) = customer_store(&storage);
    let (_, bob) = customer_store(&storage);
    let first = requests::submit_request(&alice, design()).await.unwrap();
    requests::submit_request(&bob, design()).await.unwrap();

    requests::update_request_status(
        storage.clone(),
        TransitionPolicy::Enforce,
        first.id,
        RequestStatus::InProgress,
    )
    .await
    .unwrap();

    let all = requests::list_all_requests(storage.as_ref(), None).await.unwrap();
    assert_eq!(all.len(), 2);
    let fresh = requests::list_all_requests(storage.as_ref(), Some(RequestStatus::New))
        .await
        .unwrap();
    assert_eq!(fresh.len(), 1);
    assert_ne!(fresh[0].id, first.id);
}

#[tokio::test]
async fn completed_request_cannot_be_reopened_when_enforcing() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let request = requests::submit_request(&store, design()).await.unwrap();

    let err = requests::update_request_status(
        storage.clone(),
        TransitionPolicy::Enforce,
        request.id,
        RequestStatus::Completed,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let forced = requests::update_request_status(
        storage.clone(),
        TransitionPolicy::Permissive,
        request.id,
        RequestStatus::Completed,
    )
    .await
    .unwrap();
    assert_eq!(forced.status, RequestStatus::Completed);
}

#[test]
fn request_transition_table() {
    use RequestStatus::*;
    let all = [New, InProgress, PreviewSent, Approved, Rejected, Completed];
    let allowed_from = |from: RequestStatus| -> Vec<RequestStatus> {
        match from {
            New => vec![InProgress, PreviewSent, Rejected],
            InProgress => vec![PreviewSent, Rejected],
            PreviewSent => vec![PreviewSent, InProgress, Approved, Rejected],
            Approved | Rejected => vec![Completed],
            Completed => vec![],
        }
    };
    for from in all {
        let allowed = allowed_from(from);
        for to in all {
            assert_eq!(
                from.can_transition_to(to),
                allowed.contains(&to),
                "{from:?} -> {to:?}"
            );
        }
    }
}

#[test]
fn completed_request_is_final_under_enforce() {
    use RequestStatus::*;
    for to in [New, InProgress, PreviewSent, Approved, Rejected, Completed] {
        assert!(matches!(
            check_request_transition(TransitionPolicy::Enforce, RequestStatus::Completed, to),
            Err(AppError::Conflict(_))
        ));
    }
}
