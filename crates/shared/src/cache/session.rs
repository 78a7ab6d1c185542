use crate::{abstract_trait::SessionStoreTrait, domain::UserSession};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
struct SessionEntry {
    session: Arc<UserSession>,
    expires_at: DateTime<Utc>,
}

impl SessionEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStoreTrait for MemorySessionStore {
    async fn create_session(
        &self,
        session_id: &str,
        session: UserSession,
        ttl: Duration,
    ) -> Arc<UserSession> {
        let session = Arc::new(session);
        let entry = SessionEntry {
            session: session.clone(),
            expires_at: Utc::now() + ttl,
        };

        let replaced = self
            .sessions
            .write()
            .await
            .insert(session_id.to_string(), entry)
            .is_some();

        debug!(
            "Session created for session_id: {} (replaced: {})",
            session_id, replaced
        );

        session
    }

    async fn get_session(&self, session_id: &str) -> Option<Arc<UserSession>> {
        let now = Utc::now();

        {
            let sessions = self.sessions.read().await;
            match sessions.get(session_id) {
                Some(entry) if !entry.is_expired(now) => {
                    debug!("Session retrieved for session_id: {}", session_id);
                    return Some(entry.session.clone());
                }
                Some(_) => {}
                None => {
                    debug!("Session not found: {}", session_id);
                    return None;
                }
            }
        }

        let mut sessions = self.sessions.write().await;
        if sessions
            .get(session_id)
            .is_some_and(|entry| entry.is_expired(now))
        {
            sessions.remove(session_id);
            debug!("Session expired and evicted: {}", session_id);
        }

        None
    }

    async fn delete_session(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().await.remove(session_id).is_some();
        debug!("Session deleted: {} (existed: {})", session_id, removed);
        removed
    }

    async fn refresh_session(&self, session_id: &str, ttl: Duration) -> bool {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(session_id) {
            Some(entry) if !entry.is_expired(now) => {
                entry.expires_at = now + ttl;
                debug!("Session TTL refreshed for session_id: {}", session_id);
                true
            }
            _ => false,
        }
    }

    async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now));
        before - sessions.len()
    }
}
