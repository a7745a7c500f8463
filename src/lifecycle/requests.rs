use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::{
    notifications::{self, NewNotification},
    require_text, status_label,
};
use crate::{
    error::{AppError, AppResult},
    models::{CustomRequest, Placement, RelatedType, RequestStatusChange},
    status::{RequestStatus, TransitionPolicy, check_request_transition},
    store::{Storage, StoreKey, UserStore, scan_lists},
};

#[derive(Debug, Clone)]
pub struct NewRequest {
    pub customer_name: String,
    pub color: String,
    pub size: String,
    pub placement: Placement,
    pub description: String,
    pub image_url: Option<String>,
}

fn history_entry(status: RequestStatus, note: Option<String>) -> RequestStatusChange {
    RequestStatusChange {
        id: Uuid::new_v4(),
        status,
        timestamp: Utc::now(),
        note,
    }
}

pub async fn submit_request(store: &UserStore, new: NewRequest) -> AppResult<CustomRequest> {
    let user_id = store.require_user()?;
    require_text(&new.description, "description")?;
    require_text(&new.color, "color")?;
    require_text(&new.size, "size")?;

    let request = CustomRequest {
        id: Uuid::new_v4(),
        user_id,
        customer_name: new.customer_name,
        color: new.color.trim().to_string(),
        size: new.size.trim().to_string(),
        placement: new.placement,
        description: new.description.trim().to_string(),
        image_url: new.image_url.filter(|url| !url.trim().is_empty()),
        preview_image_url: None,
        status: RequestStatus::New,
        history: vec![history_entry(RequestStatus::New, None)],
        created_at: Utc::now(),
    };

    let mut requests: Vec<CustomRequest> = store.get(StoreKey::Requests, Vec::new()).await?;
    requests.insert(0, request.clone());
    store.set(StoreKey::Requests, &requests).await?;

    tracing::info!(request_id = %request.id, user_id = %user_id, "custom request submitted");
    Ok(request)
}

/// Newest first.
pub async fn list_my_requests(store: &UserStore) -> AppResult<Vec<CustomRequest>> {
    store.get(StoreKey::Requests, Vec::new()).await
}

pub async fn get_my_request(store: &UserStore, request_id: Uuid) -> AppResult<CustomRequest> {
    list_my_requests(store)
        .await?
        .into_iter()
        .find(|r| r.id == request_id)
        .ok_or(AppError::NotFound)
}

/// Apply a customer decision on one of their own requests.
async fn customer_transition(
    store: &UserStore,
    request_id: Uuid,
    to: RequestStatus,
    note: Option<String>,
) -> AppResult<CustomRequest> {
    store.require_user()?;
    let mut requests = list_my_requests(store).await?;
    let request = requests
        .iter_mut()
        .find(|r| r.id == request_id)
        .ok_or(AppError::NotFound)?;

    if request.status != RequestStatus::PreviewSent {
        return Err(AppError::conflict(format!(
            "request is {}, not awaiting preview review",
            status_label(request.status.as_str())
        )));
    }
    check_request_transition(TransitionPolicy::Enforce, request.status, to)?;

    request.status = to;
    request.history.push(history_entry(to, note));
    let updated = request.clone();
    store.set(StoreKey::Requests, &requests).await?;
    Ok(updated)
}

pub async fn approve(store: &UserStore, request_id: Uuid) -> AppResult<CustomRequest> {
    customer_transition(store, request_id, RequestStatus::Approved, None).await
}

/// Send the preview back to the designer with the customer's notes.
pub async fn request_changes(
    store: &UserStore,
    request_id: Uuid,
    notes: &str,
) -> AppResult<CustomRequest> {
    require_text(notes, "notes")?;
    customer_transition(
        store,
        request_id,
        RequestStatus::InProgress,
        Some(notes.trim().to_string()),
    )
    .await
}

pub async fn list_all_requests(
    storage: &dyn Storage,
    status: Option<RequestStatus>,
) -> AppResult<Vec<CustomRequest>> {
    let mut requests: Vec<CustomRequest> = scan_lists::<CustomRequest>(storage, StoreKey::Requests)
        .await?
        .into_iter()
        .flat_map(|(_, list)| list)
        .filter(|r| status.is_none_or(|s| r.status == s))
        .collect();
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(requests)
}

pub async fn get_any_request(storage: &dyn Storage, request_id: Uuid) -> AppResult<CustomRequest> {
    let (_, requests, index) = locate_request(storage, request_id).await?;
    Ok(requests[index].clone())
}

async fn locate_request(
    storage: &dyn Storage,
    request_id: Uuid,
) -> AppResult<(Uuid, Vec<CustomRequest>, usize)> {
    for (user_id, requests) in scan_lists::<CustomRequest>(storage, StoreKey::Requests).await? {
        if let Some(index) = requests.iter().position(|r| r.id == request_id) {
            return Ok((user_id, requests, index));
        }
    }
    Err(AppError::NotFound)
}

/// Shared admin path: move, record, persist, notify.
async fn admin_transition(
    storage: Arc<dyn Storage>,
    policy: TransitionPolicy,
    request_id: Uuid,
    to: RequestStatus,
    preview_url: Option<String>,
) -> AppResult<CustomRequest> {
    let (owner, mut requests, index) = locate_request(storage.as_ref(), request_id).await?;
    let request = &mut requests[index];
    check_request_transition(policy, request.status, to)?;

    if let Some(url) = preview_url {
        request.preview_image_url = Some(url);
    }
    request.status = to;
    request.history.push(history_entry(to, None));
    let updated = request.clone();

    let owner_store = UserStore::new(storage, Some(owner));
    owner_store.set(StoreKey::Requests, &requests).await?;

    let (title, message) = match to {
        RequestStatus::PreviewSent => (
            "Design preview ready".to_string(),
            "A preview of your custom design is ready for review.".to_string(),
        ),
        other => (
            "Custom request updated".to_string(),
            format!(
                "Your custom request is now {}.",
                status_label(other.as_str())
            ),
        ),
    };
    notifications::notify(
        &owner_store,
        NewNotification {
            title,
            message,
            related_type: RelatedType::CustomRequest,
            related_id: updated.id,
        },
    )
    .await;

    Ok(updated)
}

pub async fn upload_preview(
    storage: Arc<dyn Storage>,
    policy: TransitionPolicy,
    request_id: Uuid,
    preview_url: &str,
) -> AppResult<CustomRequest> {
    require_text(preview_url, "preview image url")?;
    admin_transition(
        storage,
        policy,
        request_id,
        RequestStatus::PreviewSent,
        Some(preview_url.trim().to_string()),
    )
    .await
}

pub async fn update_request_status(
    storage: Arc<dyn Storage>,
    policy: TransitionPolicy,
    request_id: Uuid,
    status: RequestStatus,
) -> AppResult<CustomRequest> {
    admin_transition(storage, policy, request_id, status, None).await
}
