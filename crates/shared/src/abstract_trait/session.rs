use crate::domain::UserSession;
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

pub type DynSessionStore = Arc<dyn SessionStoreTrait + Send + Sync>;

#[async_trait]
pub trait SessionStoreTrait {
    async fn create_session(
        &self,
        session_id: &str,
        session: UserSession,
        ttl: Duration,
    ) -> Arc<UserSession>;
    async fn get_session(&self, session_id: &str) -> Option<Arc<UserSession>>;
    async fn delete_session(&self, session_id: &str) -> bool;
    async fn refresh_session(&self, session_id: &str, ttl: Duration) -> bool;
    async fn purge_expired(&self) -> usize;
}
