mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;
use uuid::Uuid;

use common::memory;
use merch_storefront_api::{
    access::{ADMIN_LOGIN_PATH, AdminArea, RouteDecision, guard_route},
    config::AppConfig,
    error::AppError,
    middleware::auth::AdminPrincipal,
    models::AdminRole,
    routes::create_api_router,
    services::{auth_service::issue_token, settings_service},
    state::AppState,
};

const SECRET: &str = "access-test-secret";

fn state() -> AppState {
    AppState::new(
        DatabaseConnection::Disconnected,
        memory(),
        AppConfig::for_tests(SECRET),
    )
}

fn app() -> Router {
    Router::new()
        .nest("/api", create_api_router())
        .with_state(state())
}

fn token(role: &str) -> String {
    issue_token(
        &AppConfig::for_tests(SECRET),
        Uuid::new_v4(),
        role,
        "someone@example.com",
        "Someone",
    )
    .unwrap()
}

async fn send(method: &str, uri: &str, body: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token("customer")));
    if body.is_some() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }
    let body = body.map(|raw| Body::from(raw.to_owned())).unwrap_or_else(Body::empty);
    let resp = app().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn status_of(uri: &str, bearer: Option<String>) -> StatusCode {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = bearer {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[test]
fn owner_reaches_every_area() {
    for area in AdminArea::ALL {
        assert!(AdminRole::Owner.can_access(area), "{area:?}");
    }
    assert!(AdminRole::Owner.can_delete_products());
}

#[test]
fn staff_is_kept_out_of_owner_areas() {
    for area in [AdminArea::Settings, AdminArea::Logs, AdminArea::AdminUsers] {
        assert!(!AdminRole::Staff.can_access(area), "{area:?}");
    }
    for area in [
        AdminArea::Dashboard,
        AdminArea::Orders,
        AdminArea::Products,
        AdminArea::Customers,
        AdminArea::Marketing,
    ] {
        assert!(AdminRole::Staff.can_access(area), "{area:?}");
    }
    assert!(!AdminRole::Staff.can_delete_products());
}

#[test]
fn designer_only_sees_custom_requests() {
    let allowed: Vec<_> = AdminArea::ALL
        .into_iter()
        .filter(|area| AdminRole::Designer.can_access(*area))
        .collect();
    assert_eq!(allowed, vec![AdminArea::CustomRequests]);
}

#[test]
fn route_guard_redirects() {
    assert_eq!(
        guard_route(None, AdminArea::Dashboard),
        RouteDecision::Redirect(ADMIN_LOGIN_PATH)
    );
    assert_eq!(
        guard_route(Some(AdminRole::Designer), AdminArea::Orders),
        RouteDecision::Redirect("/admin/requests")
    );
    assert_eq!(
        guard_route(Some(AdminRole::Staff), AdminArea::Settings),
        RouteDecision::Redirect("/admin/dashboard")
    );
    assert_eq!(
        guard_route(Some(AdminRole::Owner), AdminArea::Settings),
        RouteDecision::Allow
    );
}

#[tokio::test]
async fn staff_cannot_read_store_settings() {
    let staff = AdminPrincipal {
        admin_id: Uuid::new_v4(),
        email: "staff@example.com".into(),
        name: "Staff".into(),
        role: AdminRole::Staff,
    };

    let err = settings_service::get_store(&state(), &staff).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    assert_eq!(
        status_of("/api/admin/settings/store", None).await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        status_of("/api/admin/settings/store", Some("not-a-jwt".into())).await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn staff_token_is_refused_on_owner_routes() {
    assert_eq!(
        status_of("/api/admin/settings/store", Some(token("staff"))).await,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        status_of("/api/admin/logs", Some(token("staff"))).await,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn designer_token_is_refused_outside_requests() {
    assert_eq!(
        status_of("/api/admin/orders", Some(token("designer"))).await,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn customer_and_admin_tokens_do_not_cross() {
    assert_eq!(
        status_of("/api/admin/dashboard", Some(token("customer"))).await,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        status_of("/api/cart", Some(token("owner"))).await,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn customer_token_opens_the_cart() {
    assert_eq!(
        status_of("/api/cart", Some(token("customer"))).await,
        StatusCode::OK
    );
    assert_eq!(status_of("/api/cart", None).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_body_answers_with_the_envelope() {
    let uri = format!("/api/cart/items/{}", Uuid::new_v4());
    let (status, body) = send("PUT", &uri, Some(r#"{"quantity":"two"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn truncated_json_answers_with_the_envelope() {
    let (status, body) = send("POST", "/api/cart/items", Some(r#"{"variant_id":"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn malformed_path_id_answers_with_the_envelope() {
    let (status, body) = send("DELETE", "/api/cart/items/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}
