use crate::{
    access::{has_all_permissions, has_any_permission},
    domain::{RouteRequirement, UserSession},
};
use serde::Serialize;
use utoipa::ToSchema;

pub const LOGIN_ROUTE: &str = "/login";
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Unauthenticated,
    Authorized,
    Unauthorized,
}

impl GuardState {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardState::Unauthenticated => Some(LOGIN_ROUTE),
            GuardState::Authorized => None,
            GuardState::Unauthorized => Some(UNAUTHORIZED_ROUTE),
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, GuardState::Authorized)
    }
}

pub fn evaluate_route(session: Option<&UserSession>, requirement: &RouteRequirement) -> GuardState {
    let Some(session) = session else {
        return GuardState::Unauthenticated;
    };

    if requirement.is_open() || session.is_admin() {
        return GuardState::Authorized;
    }

    let allowed = if requirement.require_all() {
        has_all_permissions(session.scope(), requirement.permissions())
    } else {
        has_any_permission(session.scope(), requirement.permissions())
    };

    if allowed {
        GuardState::Authorized
    } else {
        GuardState::Unauthorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn session(role: Role, scope: &[&str]) -> UserSession {
        UserSession::new(42, role, scope.iter().copied()).unwrap()
    }

    #[test]
    fn missing_session_goes_to_login() {
        let requirements = [
            RouteRequirement::none(),
            RouteRequirement::any_of(&["order:read"]),
            RouteRequirement::all_of(&["order:read", "product:read"]),
        ];

        for requirement in &requirements {
            let state = evaluate_route(None, requirement);
            assert_eq!(state, GuardState::Unauthenticated);
            assert_eq!(state.redirect_target(), Some(LOGIN_ROUTE));
        }
    }

    #[test]
    fn open_route_admits_any_session() {
        let buyer = session(Role::Buyer, &[]);
        assert_eq!(
            evaluate_route(Some(&buyer), &RouteRequirement::none()),
            GuardState::Authorized
        );
    }

    #[test]
    fn any_of_without_match_is_unauthorized() {
        let staff = session(Role::Staff, &["order:read"]);
        let requirement = RouteRequirement::any_of(&["user:read", "product:read"]);

        let state = evaluate_route(Some(&staff), &requirement);

        assert_eq!(state, GuardState::Unauthorized);
        assert_eq!(state.redirect_target(), Some(UNAUTHORIZED_ROUTE));
    }

    #[test]
    fn all_of_with_every_permission_is_authorized() {
        let staff = session(Role::Staff, &["order:read", "product:read"]);
        let requirement = RouteRequirement::all_of(&["order:read", "product:read"]);

        let state = evaluate_route(Some(&staff), &requirement);

        assert!(state.is_authorized());
        assert_eq!(state.redirect_target(), None);
    }

    #[test]
    fn all_of_with_partial_scope_is_unauthorized() {
        let staff = session(Role::Staff, &["order:read"]);
        let requirement = RouteRequirement::all_of(&["order:read", "product:read"]);

        assert_eq!(
            evaluate_route(Some(&staff), &requirement),
            GuardState::Unauthorized
        );
    }

    #[test]
    fn any_of_with_one_match_is_authorized() {
        let manager = session(Role::Manager, &["product:read"]);
        let requirement = RouteRequirement::any_of(&["order:read", "product:read"]);

        assert!(evaluate_route(Some(&manager), &requirement).is_authorized());
    }

    #[test]
    fn admin_is_always_authorized() {
        let admin = session(Role::Admin, &[]);
        let requirements = [
            RouteRequirement::none(),
            RouteRequirement::any_of(&["user:read"]),
            RouteRequirement::all_of(&["user:read", "user:delete"]),
        ];

        for requirement in &requirements {
            assert!(evaluate_route(Some(&admin), requirement).is_authorized());
        }
    }

    #[test]
    fn lowercase_admin_role_gets_no_bypass() {
        let pretender = session(Role::from("admin"), &[]);
        let requirement = RouteRequirement::any_of(&["user:read"]);

        assert_eq!(
            evaluate_route(Some(&pretender), &requirement),
            GuardState::Unauthorized
        );
    }

    #[test]
    fn serializes_state_in_snake_case() {
        let value = serde_json::to_value(GuardState::Unauthenticated).unwrap();
        assert_eq!(value, "unauthenticated");
    }
}
