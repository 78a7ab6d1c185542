use crate::errors::ServiceError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RouteRequirement {
    permissions: Vec<String>,
    require_all: bool,
}

impl RouteRequirement {
    pub fn new<I, S>(permissions: I, require_all: bool) -> Result<Self, ServiceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let permissions: Vec<String> = permissions.into_iter().map(Into::into).collect();

        if permissions.iter().any(|p| p.is_empty()) {
            return Err(ServiceError::Validation(vec![
                "route permissions must not be empty strings".to_string(),
            ]));
        }

        Ok(Self {
            permissions,
            require_all,
        })
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Static route tables only; panics on an empty permission string.
    pub fn any_of(permissions: &[&str]) -> Self {
        Self::from_static(permissions, false)
    }

    pub fn all_of(permissions: &[&str]) -> Self {
        Self::from_static(permissions, true)
    }

    fn from_static(permissions: &[&str], require_all: bool) -> Self {
        assert!(
            permissions.iter().all(|p| !p.is_empty()),
            "route permission must not be empty"
        );

        Self {
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            require_all,
        }
    }

    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    pub fn require_all(&self) -> bool {
        self.require_all
    }

    pub fn is_open(&self) -> bool {
        self.permissions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requirement_is_open_and_any() {
        let requirement = RouteRequirement::none();
        assert!(requirement.is_open());
        assert!(!requirement.require_all());
    }

    #[test]
    fn new_rejects_empty_permission() {
        assert!(RouteRequirement::new(["order:read", ""], false).is_err());
        assert!(RouteRequirement::new(Vec::<String>::new(), true).is_ok());
    }

    #[test]
    #[should_panic(expected = "route permission must not be empty")]
    fn static_constructor_fails_fast() {
        RouteRequirement::all_of(&["order:read", ""]);
    }
}
