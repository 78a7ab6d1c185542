pub mod abstract_trait;
pub mod access;
pub mod cache;
pub mod config;
pub mod domain;
pub mod errors;
pub mod utils;
