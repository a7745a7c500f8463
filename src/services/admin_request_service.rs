use uuid::Uuid;

use crate::{
    access::AdminArea,
    dto::custom_requests::{UpdateRequestStatusRequest, UploadPreviewRequest},
    error::{AppError, AppResult},
    lifecycle::requests,
    middleware::auth::AdminPrincipal,
    models::CustomRequest,
    response::{ApiResponse, paginate},
    routes::params::RequestListQuery,
    services::record_admin_action,
    state::AppState,
    status::RequestStatus,
};

fn parse_status(raw: &str) -> AppResult<RequestStatus> {
    RequestStatus::parse(raw.trim())
        .ok_or_else(|| AppError::invalid(format!("unknown request status {raw:?}")))
}

pub async fn list_requests(
    state: &AppState,
    admin: &AdminPrincipal,
    query: RequestListQuery,
) -> AppResult<ApiResponse<Vec<CustomRequest>>> {
    admin.ensure_area(AdminArea::CustomRequests)?;
    let (page, limit, _) = query.pagination().normalize();
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(parse_status(raw)?),
        None => None,
    };

    let all = requests::list_all_requests(state.store.as_ref(), status).await?;
    let (items, meta) = paginate(all, page, limit);
    Ok(ApiResponse::paginated(items, meta))
}

pub async fn get_request(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
) -> AppResult<ApiResponse<CustomRequest>> {
    admin.ensure_area(AdminArea::CustomRequests)?;
    Ok(ApiResponse::success(
        requests::get_any_request(state.store.as_ref(), id).await?,
    ))
}

pub async fn upload_preview(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: UploadPreviewRequest,
) -> AppResult<ApiResponse<CustomRequest>> {
    admin.ensure_area(AdminArea::CustomRequests)?;
    let request = requests::upload_preview(
        state.store.clone(),
        state.transition_policy(),
        id,
        &payload.preview_image_url,
    )
    .await?;

    record_admin_action(
        state,
        admin,
        "Uploaded Design Preview",
        format!("Preview sent for custom request {id}"),
    )
    .await;

    Ok(ApiResponse::success(request))
}

pub async fn update_status(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: UpdateRequestStatusRequest,
) -> AppResult<ApiResponse<CustomRequest>> {
    admin.ensure_area(AdminArea::CustomRequests)?;
    let status = parse_status(&payload.status)?;
    let request =
        requests::update_request_status(state.store.clone(), state.transition_policy(), id, status)
            .await?;

    record_admin_action(
        state,
        admin,
        "Updated Custom Request Status",
        format!("Custom request {id} changed to {}", status.as_str()),
    )
    .await;

    Ok(ApiResponse::success(request))
}
