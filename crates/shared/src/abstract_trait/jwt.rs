use crate::{config::Claims, errors::ServiceError};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn generate_token(
        &self,
        user_id: i64,
        role: &str,
        scope: &[String],
        token_type: &str,
    ) -> Result<String, ServiceError>;
    fn encode_claims(&self, claims: &Claims) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Claims, ServiceError>;
}
