use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use crate::{
    access::AdminArea,
    entity::admin_logs::{Column as LogCol, Entity as AdminLogs},
    error::AppResult,
    mapper::map_admin_log,
    middleware::auth::AdminPrincipal,
    models::AdminLog,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_logs(
    state: &AppState,
    admin: &AdminPrincipal,
    pagination: Pagination,
) -> AppResult<ApiResponse<Vec<AdminLog>>> {
    admin.ensure_area(AdminArea::Logs)?;
    let (page, limit, offset) = pagination.normalize();

    let finder = AdminLogs::find().order_by_desc(LogCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let logs = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(map_admin_log)
        .collect();

    Ok(ApiResponse::paginated(logs, Meta::new(page, limit, total)))
}
