use crate::{config::Claims, errors::ServiceError};
use serde::Serialize;
use std::{collections::BTreeSet, fmt};
use utoipa::ToSchema;

pub type Scope = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Role {
    Admin,
    Manager,
    Staff,
    Seller,
    Buyer,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Staff => "STAFF",
            Role::Seller => "SELLER",
            Role::Buyer => "BUYER",
            Role::Other(name) => name,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "ADMIN" => Role::Admin,
            "MANAGER" => Role::Manager,
            "STAFF" => Role::Staff,
            "SELLER" => Role::Seller,
            "BUYER" => Role::Buyer,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserSession {
    user_id: i64,
    #[schema(value_type = String, example = "STAFF")]
    role: Role,
    #[schema(value_type = Vec<String>, example = json!(["order:read"]))]
    scope: Scope,
}

impl UserSession {
    pub fn new<I, S>(user_id: i64, role: Role, scope: I) -> Result<Self, ServiceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scope: Scope = scope.into_iter().map(Into::into).collect();

        if scope.iter().any(|permission| permission.is_empty()) {
            return Err(ServiceError::Validation(vec![
                "scope: permission strings must not be empty".to_string(),
            ]));
        }

        Ok(Self {
            user_id,
            role,
            scope,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl TryFrom<Claims> for UserSession {
    type Error = ServiceError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        UserSession::new(claims.user_id, Role::from(claims.role), claims.scope)
    }
}
