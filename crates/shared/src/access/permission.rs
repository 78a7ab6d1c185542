use crate::domain::Scope;

/// Exact membership test. No wildcard, prefix or case folding.
pub fn has_permission(scope: &Scope, required: &str) -> bool {
    debug_assert!(!required.is_empty(), "required permission must not be empty");
    scope.contains(required)
}

/// False when `required` is empty.
pub fn has_any_permission<S: AsRef<str>>(scope: &Scope, required: &[S]) -> bool {
    required.iter().any(|p| has_permission(scope, p.as_ref()))
}

/// True when `required` is empty.
pub fn has_all_permissions<S: AsRef<str>>(scope: &Scope, required: &[S]) -> bool {
    required.iter().all(|p| has_permission(scope, p.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(items: &[&str]) -> Scope {
        items.iter().map(|s| s.to_string()).collect()
    }

    const NONE: [&str; 0] = [];

    #[test]
    fn membership_is_exact() {
        let held = scope(&["order:read", "product:read"]);

        assert!(has_permission(&held, "order:read"));
        assert!(!has_permission(&held, "order"));
        assert!(!has_permission(&held, "order:rea"));
        assert!(!has_permission(&held, "Order:read"));
        assert!(!has_permission(&held, "order:read:extra"));
    }

    #[test]
    fn empty_scope_holds_nothing() {
        assert!(!has_permission(&Scope::new(), "order:read"));
    }

    #[test]
    fn any_over_empty_requirement_is_false() {
        assert!(!has_any_permission(&Scope::new(), &NONE));
        assert!(!has_any_permission(&scope(&["order:read"]), &NONE));
    }

    #[test]
    fn all_over_empty_requirement_is_true() {
        assert!(has_all_permissions(&Scope::new(), &NONE));
        assert!(has_all_permissions(&scope(&["order:read"]), &NONE));
    }

    #[test]
    fn any_needs_one_match() {
        let held = scope(&["order:read"]);

        assert!(has_any_permission(&held, &["user:read", "order:read"]));
        assert!(!has_any_permission(&held, &["user:read", "product:read"]));
    }

    #[test]
    fn all_needs_every_match() {
        let held = scope(&["order:read", "product:read"]);

        assert!(has_all_permissions(&held, &["order:read", "product:read"]));
        assert!(!has_all_permissions(&held, &["order:read", "user:read"]));
    }

    #[test]
    fn all_implies_any_for_non_empty_requirements() {
        let held = scope(&["order:read", "product:read", "stock:read"]);
        let requirements: [&[&str]; 5] = [
            &["order:read"],
            &["order:read", "product:read"],
            &["stock:read", "user:read"],
            &["user:read"],
            &["order:read", "product:read", "stock:read"],
        ];

        for required in requirements {
            if has_all_permissions(&held, required) {
                assert!(has_any_permission(&held, required), "{required:?}");
            }
        }
    }

    #[test]
    fn accepts_owned_requirement_lists() {
        let held = scope(&["brand:read"]);
        let required = vec!["brand:read".to_string()];

        assert!(has_any_permission(&held, &required));
        assert!(has_all_permissions(&held, &required));
    }
}
