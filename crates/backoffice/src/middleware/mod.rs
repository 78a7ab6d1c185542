pub mod guard;
pub mod metrics;
pub mod session;
pub mod validate;
