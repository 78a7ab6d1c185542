use serde::Serialize;
use shared::access::GuardState;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessDecisionResponse {
    pub path: String,
    pub state: GuardState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    pub permissions: Vec<String>,
    pub require_all: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PageResponse {
    pub path: String,
    pub title: String,
}
