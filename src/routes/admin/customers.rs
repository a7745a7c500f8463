use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::{admin::CustomerDetail, orders::AddNoteRequest},
    error::AppResult,
    extract::{Json, Path, Query},
    middleware::auth::AdminPrincipal,
    models::{Customer, CustomerNote},
    response::ApiResponse,
    routes::params::Pagination,
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/{id}", get(get_customer))
        .route("/{id}/notes", post(add_customer_note))
}

#[utoipa::path(
    get,
    path = "/api/admin/customers",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Customers with order aggregates", body = ApiResponse<Vec<Customer>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Customer>>>> {
    let resp = customer_service::list_customers(&state, &admin, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/customers/{id}",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer with orders and notes", body = ApiResponse<CustomerDetail>),
        (status = 404, description = "Customer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CustomerDetail>>> {
    let resp = customer_service::get_customer(&state, &admin, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/customers/{id}/notes",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    request_body = AddNoteRequest,
    responses(
        (status = 200, description = "Internal note added", body = ApiResponse<CustomerNote>),
        (status = 404, description = "Customer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn add_customer_note(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddNoteRequest>,
) -> AppResult<Json<ApiResponse<CustomerNote>>> {
    let resp = customer_service::add_note(&state, &admin, id, payload).await?;
    Ok(Json(resp))
}
