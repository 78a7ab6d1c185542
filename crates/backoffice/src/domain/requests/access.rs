use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AccessCheckQuery {
    /// Page path to evaluate, e.g. `/admin/orders`.
    pub path: String,
}
