use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorBody;

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Meta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

impl Meta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self { page, limit, total }
    }
}

/// Envelope wrapping every JSON body the API returns.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            meta: None,
            error: None,
        }
    }

    pub fn paginated(data: T, meta: Meta) -> Self {
        Self {
            success: true,
            data: Some(data),
            meta: Some(meta),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(error: ErrorBody) -> Self {
        Self {
            success: false,
            data: None,
            meta: None,
            error: Some(error),
        }
    }
}

/// Body for mutations that have nothing to return.
#[derive(Debug, Serialize, ToSchema, Clone, Copy)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Slice one page out of an already ordered list.
pub fn paginate<T>(items: Vec<T>, page: i64, limit: i64) -> (Vec<T>, Meta) {
    let total = items.len() as i64;
    let offset = page.saturating_sub(1).saturating_mul(limit).max(0) as usize;
    let page_items = items
        .into_iter()
        .skip(offset)
        .take(limit.max(0) as usize)
        .collect();
    (page_items, Meta::new(page, limit, total))
}
