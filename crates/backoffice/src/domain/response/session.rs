use serde::Serialize;
use shared::domain::UserSession;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: String,
    pub session: UserSession,
}
