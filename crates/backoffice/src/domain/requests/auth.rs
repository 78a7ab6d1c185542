use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Access token issued by the authentication backend.
    #[validate(length(min = 1, message = "access_token is required"))]
    pub access_token: String,
}
