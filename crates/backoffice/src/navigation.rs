use anyhow::{Context, Result};
use shared::{
    access::permissions::*,
    domain::{MenuEntry, RouteRequirement, validate_menu},
};
use std::path::Path;
use tracing::info;

pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGOUT_ROUTE: &str = "/logout";
pub const HELP_URL: &str = "https://help.backoffice.example.com";

pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::link("dashboard", "Dashboard", "/admin/dashboard").with_permission(DASHBOARD_READ),
        MenuEntry::group(
            "catalog",
            "Catalog",
            vec![
                MenuEntry::link("products", "Products", "/admin/products")
                    .with_permission(PRODUCT_READ),
                MenuEntry::link("categories", "Categories", "/admin/categories")
                    .with_permission(CATEGORY_READ),
                MenuEntry::link("brands", "Brands", "/admin/brands").with_permission(BRAND_READ),
            ],
        )
        .with_permission(PRODUCT_READ),
        MenuEntry::link("stock", "Inventory", "/admin/stock").with_permission(STOCK_READ),
        MenuEntry::link("orders", "Orders", "/admin/orders").with_permission(ORDER_READ),
        MenuEntry::link("customers", "Customers", "/admin/customers")
            .with_permission(CUSTOMER_READ),
        MenuEntry::group(
            "authorization",
            "Authorization",
            vec![
                MenuEntry::link("users", "Users", "/admin/users").with_permission(USER_READ),
                MenuEntry::link("roles", "Roles", "/admin/roles")
                    .with_permission(AUTHORIZATION_READ),
                MenuEntry::link("role_assign", "Assign permissions", "/admin/roles/assign")
                    .with_permission(ROLE_PERMISSION_ASSIGN),
            ],
        )
        .with_permission(AUTHORIZATION_READ),
        MenuEntry::link("store", "Store profile", "/admin/store").with_permission(STORE_READ),
        MenuEntry::link("activity", "Activity log", "/admin/activity")
            .with_permission(ACTIVITY_READ),
        MenuEntry::link("account", "Account settings", "/admin/account"),
        MenuEntry::external("help", "Help", HELP_URL),
        MenuEntry::link("logout", "Log out", LOGOUT_ROUTE),
    ]
}

pub async fn load_menu(path: &Path) -> Result<Vec<MenuEntry>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read menu file {}", path.display()))?;

    let items: Vec<MenuEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Menu file {} is not a valid menu tree", path.display()))?;

    validate_menu(&items).with_context(|| format!("Menu file {} is invalid", path.display()))?;

    info!("Loaded {} top-level menu entries from {}", items.len(), path.display());

    Ok(items)
}

#[derive(Debug, Clone)]
pub struct ProtectedRoute {
    pub path: &'static str,
    pub title: &'static str,
    pub requirement: RouteRequirement,
}

impl ProtectedRoute {
    fn new(path: &'static str, title: &'static str, requirement: RouteRequirement) -> Self {
        Self {
            path,
            title,
            requirement,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<ProtectedRoute>,
}

impl RouteTable {
    pub fn new(routes: Vec<ProtectedRoute>) -> Self {
        Self { routes }
    }

    /// Exact path lookup; a trailing slash is ignored.
    pub fn find(&self, path: &str) -> Option<&ProtectedRoute> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        self.routes.iter().find(|route| route.path == path)
    }

    pub fn routes(&self) -> &[ProtectedRoute] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(protected_routes())
    }
}

pub fn protected_routes() -> Vec<ProtectedRoute> {
    vec![
        ProtectedRoute::new(
            "/admin/dashboard",
            "Dashboard",
            RouteRequirement::any_of(&[DASHBOARD_READ]),
        ),
        ProtectedRoute::new(
            "/admin/products",
            "Products",
            RouteRequirement::any_of(&[PRODUCT_READ]),
        ),
        ProtectedRoute::new(
            "/admin/products/new",
            "New product",
            RouteRequirement::all_of(&[PRODUCT_READ, PRODUCT_CREATE]),
        ),
        ProtectedRoute::new(
            "/admin/categories",
            "Categories",
            RouteRequirement::any_of(&[CATEGORY_READ]),
        ),
        ProtectedRoute::new(
            "/admin/brands",
            "Brands",
            RouteRequirement::any_of(&[BRAND_READ]),
        ),
        ProtectedRoute::new(
            "/admin/stock",
            "Inventory",
            RouteRequirement::any_of(&[STOCK_READ]),
        ),
        ProtectedRoute::new(
            "/admin/orders",
            "Orders",
            RouteRequirement::any_of(&[ORDER_READ]),
        ),
        ProtectedRoute::new(
            "/admin/customers",
            "Customers",
            RouteRequirement::any_of(&[CUSTOMER_READ]),
        ),
        ProtectedRoute::new(
            "/admin/users",
            "Users",
            RouteRequirement::any_of(&[USER_READ]),
        ),
        ProtectedRoute::new(
            "/admin/roles",
            "Roles",
            RouteRequirement::any_of(&[AUTHORIZATION_READ, ROLE_PERMISSION_ASSIGN]),
        ),
        ProtectedRoute::new(
            "/admin/roles/assign",
            "Assign permissions",
            RouteRequirement::all_of(&[AUTHORIZATION_READ, ROLE_PERMISSION_ASSIGN]),
        ),
        ProtectedRoute::new(
            "/admin/store",
            "Store profile",
            RouteRequirement::any_of(&[STORE_READ]),
        ),
        ProtectedRoute::new(
            "/admin/activity",
            "Activity log",
            RouteRequirement::any_of(&[ACTIVITY_READ]),
        ),
        ProtectedRoute::new("/admin/account", "Account settings", RouteRequirement::none()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        access::filter_menu_items,
        domain::{Role, UserSession},
    };

    fn menu_paths(items: &[MenuEntry], out: &mut Vec<String>) {
        for entry in items {
            match entry {
                MenuEntry::Link(link) if !link.external => out.push(link.path.clone()),
                MenuEntry::Link(_) => {}
                MenuEntry::Group(group) => menu_paths(&group.children, out),
            }
        }
    }

    #[test]
    fn default_menu_is_valid() {
        assert!(validate_menu(&default_menu()).is_ok());
    }

    #[test]
    fn every_admin_menu_link_has_a_route() {
        let table = RouteTable::default();
        let mut paths = Vec::new();
        menu_paths(&default_menu(), &mut paths);

        for path in paths.iter().filter(|p| p.starts_with(ADMIN_PREFIX)) {
            assert!(table.find(path).is_some(), "no route for {path}");
        }
    }

    #[test]
    fn external_help_link_survives_an_empty_scope() {
        let seller = UserSession::new(3, Role::Seller, Vec::<String>::new()).unwrap();
        let visible = filter_menu_items(&default_menu(), &seller);

        let keys: Vec<&str> = visible.iter().map(MenuEntry::key).collect();
        assert_eq!(keys, ["account", "help", "logout"]);
        assert!(matches!(
            &visible[1],
            MenuEntry::Link(link) if link.external && link.path == HELP_URL
        ));
    }

    #[test]
    fn every_route_permission_is_in_catalog() {
        for route in protected_routes() {
            for permission in route.requirement.permissions() {
                assert!(is_known_permission(permission), "{permission}");
            }
        }
    }

    #[test]
    fn find_ignores_trailing_slash() {
        let table = RouteTable::default();

        assert_eq!(table.find("/admin/orders/").map(|r| r.title), Some("Orders"));
        assert!(table.find("/admin/unknown").is_none());
        assert!(table.find("/").is_none());
    }

    #[tokio::test]
    async fn load_menu_rejects_duplicate_keys() {
        let path = std::env::temp_dir().join(format!("menu-{}.json", uuid::Uuid::new_v4()));
        let raw = r#"[
            {"type": "link", "key": "orders", "label": "Orders", "path": "/admin/orders"},
            {"type": "link", "key": "orders", "label": "Orders again", "path": "/admin/orders"}
        ]"#;
        tokio::fs::write(&path, raw).await.unwrap();

        let result = load_menu(&path).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn load_menu_reads_valid_tree() {
        let path = std::env::temp_dir().join(format!("menu-{}.json", uuid::Uuid::new_v4()));
        let raw = serde_json::to_string(&default_menu()).unwrap();
        tokio::fs::write(&path, raw).await.unwrap();

        let loaded = load_menu(&path).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(loaded.unwrap(), default_menu());
    }
}
