pub mod config;
pub mod domain;
pub mod handler;
pub mod middleware;
pub mod navigation;
pub mod state;
