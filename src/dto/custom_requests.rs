use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomRequest {
    pub color: String,
    pub size: String,
    /// `front`, `back` or `both`.
    pub placement: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RequestChangesRequest {
    pub notes: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadPreviewRequest {
    pub preview_image_url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequestStatusRequest {
    pub status: String,
}
