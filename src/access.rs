//! Which back-office areas each admin role may enter.

use crate::{error::AppError, models::AdminRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminArea {
    Dashboard,
    Orders,
    CustomRequests,
    Products,
    Collections,
    Marketing,
    Customers,
    Settings,
    Logs,
    AdminUsers,
}

impl AdminArea {
    pub const ALL: [AdminArea; 10] = [
        AdminArea::Dashboard,
        AdminArea::Orders,
        AdminArea::CustomRequests,
        AdminArea::Products,
        AdminArea::Collections,
        AdminArea::Marketing,
        AdminArea::Customers,
        AdminArea::Settings,
        AdminArea::Logs,
        AdminArea::AdminUsers,
    ];
}

impl AdminRole {
    pub fn can_access(&self, area: AdminArea) -> bool {
        match self {
            AdminRole::Owner => true,
            AdminRole::Staff => !matches!(
                area,
                AdminArea::Settings | AdminArea::Logs | AdminArea::AdminUsers
            ),
            AdminRole::Designer => matches!(area, AdminArea::CustomRequests),
        }
    }

    pub fn can_delete_products(&self) -> bool {
        matches!(self, AdminRole::Owner)
    }

    /// Landing page after login, and where a refused page sends the admin.
    pub fn home_path(&self) -> &'static str {
        match self {
            AdminRole::Owner | AdminRole::Staff => "/admin/dashboard",
            AdminRole::Designer => "/admin/requests",
        }
    }

    pub fn ensure_access(&self, area: AdminArea) -> Result<(), AppError> {
        if self.can_access(area) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Navigation guard for back-office pages.
pub fn guard_route(admin: Option<AdminRole>, area: AdminArea) -> RouteDecision {
    match admin {
        None => RouteDecision::Redirect(ADMIN_LOGIN_PATH),
        Some(role) if !role.can_access(area) => RouteDecision::Redirect(role.home_path()),
        Some(_) => RouteDecision::Allow,
    }
}
