use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuEntry {
    Link(MenuLink),
    Group(MenuGroup),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuLink {
    pub key: String,
    pub label: String,
    /// `None` keeps the link visible to every signed-in user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    pub path: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuGroup {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[schema(no_recursion)]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn link(key: &str, label: &str, path: &str) -> Self {
        MenuEntry::Link(MenuLink {
            key: key.to_string(),
            label: label.to_string(),
            permission: None,
            path: path.to_string(),
            external: false,
        })
    }

    pub fn external(key: &str, label: &str, url: &str) -> Self {
        MenuEntry::Link(MenuLink {
            key: key.to_string(),
            label: label.to_string(),
            permission: None,
            path: url.to_string(),
            external: true,
        })
    }

    pub fn group(key: &str, label: &str, children: Vec<MenuEntry>) -> Self {
        MenuEntry::Group(MenuGroup {
            key: key.to_string(),
            label: label.to_string(),
            permission: None,
            children,
        })
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        let slot = match &mut self {
            MenuEntry::Link(link) => &mut link.permission,
            MenuEntry::Group(group) => &mut group.permission,
        };
        *slot = Some(permission.to_string());
        self
    }

    pub fn key(&self) -> &str {
        match self {
            MenuEntry::Link(link) => &link.key,
            MenuEntry::Group(group) => &group.key,
        }
    }

    pub fn permission(&self) -> Option<&str> {
        match self {
            MenuEntry::Link(link) => link.permission.as_deref(),
            MenuEntry::Group(group) => group.permission.as_deref(),
        }
    }

    pub fn children(&self) -> Option<&[MenuEntry]> {
        match self {
            MenuEntry::Link(_) => None,
            MenuEntry::Group(group) => Some(&group.children),
        }
    }
}

/// Checks a menu tree loaded from configuration: keys are unique across the
/// whole tree and no entry carries an empty permission string.
pub fn validate_menu(items: &[MenuEntry]) -> Result<(), ServiceError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();
    collect_menu_errors(items, &mut seen, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}

fn collect_menu_errors<'a>(
    items: &'a [MenuEntry],
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<String>,
) {
    for entry in items {
        let key = entry.key();

        if key.is_empty() {
            errors.push("menu entry with empty key".to_string());
        } else if !seen.insert(key) {
            errors.push(format!("duplicate menu key: {key}"));
        }

        if entry.permission().is_some_and(str::is_empty) {
            errors.push(format!("{key}: permission must not be empty"));
        }

        if let Some(children) = entry.children() {
            collect_menu_errors(children, seen, errors);
        }
    }
}
