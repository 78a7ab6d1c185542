mod gracefullshutdown;
mod logs;
mod metrics;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{
    GuardLabels, GuardOutcome, Labels, Method, Metrics, SessionEvent, SessionLabels, Status,
};
