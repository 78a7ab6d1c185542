use crate::access::GuardState;
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Other,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Redirect,
    Error,
}

impl Status {
    pub fn from_code(code: u16) -> Self {
        match code {
            300..=399 => Status::Redirect,
            400.. => Status::Error,
            _ => Status::Success,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum GuardOutcome {
    Authorized,
    Unauthenticated,
    Unauthorized,
}

impl From<GuardState> for GuardOutcome {
    fn from(state: GuardState) -> Self {
        match state {
            GuardState::Authorized => GuardOutcome::Authorized,
            GuardState::Unauthenticated => GuardOutcome::Unauthenticated,
            GuardState::Unauthorized => GuardOutcome::Unauthorized,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct GuardLabels {
    pub outcome: GuardOutcome,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum SessionEvent {
    Created,
    Rejected,
    Deleted,
    Purged,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct SessionLabels {
    pub event: SessionEvent,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
    pub guard_decisions: Family<GuardLabels, Counter>,
    pub session_events: Family<SessionLabels, Counter>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
            guard_decisions: Family::default(),
            session_events: Family::default(),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "backoffice_requests",
            "Total number of HTTP requests handled",
            self.request_counter.clone(),
        );
        registry.register(
            "backoffice_request_duration_seconds",
            "Histogram of HTTP request durations",
            self.request_duration.clone(),
        );
        registry.register(
            "backoffice_guard_decisions",
            "Route guard decisions by outcome",
            self.guard_decisions.clone(),
        );
        registry.register(
            "backoffice_session_events",
            "Session lifecycle events",
            self.session_events.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    pub fn record_guard(&self, state: GuardState) {
        self.guard_decisions
            .get_or_create(&GuardLabels {
                outcome: state.into(),
            })
            .inc();
    }

    pub fn record_session(&self, event: SessionEvent) {
        self.session_events
            .get_or_create(&SessionLabels { event })
            .inc_by(1);
    }

    pub fn record_sessions_purged(&self, count: u64) {
        self.session_events
            .get_or_create(&SessionLabels {
                event: SessionEvent::Purged,
            })
            .inc_by(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn status_groups_codes() {
        assert_eq!(Status::from_code(200), Status::Success);
        assert_eq!(Status::from_code(303), Status::Redirect);
        assert_eq!(Status::from_code(401), Status::Error);
        assert_eq!(Status::from_code(503), Status::Error);
    }

    #[test]
    fn guard_decisions_are_exported() {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        metrics.record_guard(GuardState::Unauthorized);
        metrics.record_guard(GuardState::Unauthorized);
        metrics.record_guard(GuardState::Authorized);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();

        assert!(buffer.contains(r#"backoffice_guard_decisions_total{outcome="Unauthorized"} 2"#));
        assert!(buffer.contains(r#"backoffice_guard_decisions_total{outcome="Authorized"} 1"#));
    }
}
