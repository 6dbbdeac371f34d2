use serde::Serialize;
use utoipa::ToSchema;

/// Body of a successful create.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "Tour created successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i32,
}

impl CreatedResponse {
    pub fn new(message: &str, id: i32) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

/// Body of a successful update or delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Tour updated successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}
