use crate::{
    config::Config,
    navigation::{RouteTable, default_menu, load_menu},
};
use anyhow::{Context, Result};
use chrono::Duration;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynJwtService, DynSessionStore},
    cache::MemorySessionStore,
    config::JwtConfig,
    domain::MenuEntry,
    utils::Metrics,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub sessions: DynSessionStore,
    pub menu: Arc<Vec<MenuEntry>>,
    pub routes: Arc<RouteTable>,
    pub session_ttl: Duration,
    pub cookie_secure: bool,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Metrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("sessions", &"DynSessionStore")
            .field("menu_entries", &self.menu.len())
            .field("routes", &self.routes.routes().len())
            .field("session_ttl", &self.session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let sessions = Arc::new(MemorySessionStore::new()) as DynSessionStore;

        let menu = match &config.menu_file {
            Some(path) => load_menu(path)
                .await
                .context("Failed to load navigation menu")?,
            None => {
                info!("Using built-in navigation menu");
                default_menu()
            }
        };

        let metrics = Arc::new(Metrics::new());
        let registry = Arc::new(Mutex::new(Registry::default()));
        metrics.register(&mut *registry.lock().await);

        if config.session_sweep_seconds > 0 {
            tokio::spawn(run_session_sweeper(
                sessions.clone(),
                metrics.clone(),
                std::time::Duration::from_secs(config.session_sweep_seconds),
            ));
        }

        Ok(Self {
            jwt_config,
            sessions,
            menu: Arc::new(menu),
            routes: Arc::new(RouteTable::default()),
            session_ttl: Duration::minutes(config.session_ttl_minutes),
            cookie_secure: config.cookie_secure,
            registry,
            metrics,
        })
    }
}

async fn run_session_sweeper(
    sessions: DynSessionStore,
    metrics: Arc<Metrics>,
    every: std::time::Duration,
) {
    let mut interval = tokio::time::interval(every);
    loop {
        interval.tick().await;
        let purged = sessions.purge_expired().await;
        if purged > 0 {
            info!("Purged {} expired sessions", purged);
            metrics.record_sessions_purged(purged as u64);
        }
    }
}
