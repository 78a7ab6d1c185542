use crate::{
    access::has_permission,
    domain::{MenuEntry, MenuGroup, Scope, UserSession},
};

/// Returns the part of `items` the session may see, in the original order.
///
/// Admins get the tree back untouched. For everyone else an entry without a
/// permission is kept as-is (children included), a link is kept when its
/// permission is held, and a group is kept only if at least one child
/// survives. A group's own permission does not gate it.
pub fn filter_menu_items(items: &[MenuEntry], session: &UserSession) -> Vec<MenuEntry> {
    if session.is_admin() {
        return items.to_vec();
    }

    filter_entries(items, session.scope())
}

fn filter_entries(items: &[MenuEntry], scope: &Scope) -> Vec<MenuEntry> {
    items
        .iter()
        .filter_map(|entry| filter_entry(entry, scope))
        .collect()
}

fn filter_entry(entry: &MenuEntry, scope: &Scope) -> Option<MenuEntry> {
    let Some(permission) = entry.permission() else {
        return Some(entry.clone());
    };

    match entry {
        MenuEntry::Group(group) => {
            let children = filter_entries(&group.children, scope);
            if children.is_empty() {
                return None;
            }

            Some(MenuEntry::Group(MenuGroup {
                key: group.key.clone(),
                label: group.label.clone(),
                permission: group.permission.clone(),
                children,
            }))
        }
        MenuEntry::Link(_) => has_permission(scope, permission).then(|| entry.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn session(role: Role, scope: &[&str]) -> UserSession {
        UserSession::new(1, role, scope.iter().copied()).unwrap()
    }

    fn keys(items: &[MenuEntry]) -> Vec<&str> {
        items.iter().map(MenuEntry::key).collect()
    }

    fn sample_tree() -> Vec<MenuEntry> {
        vec![
            MenuEntry::link("dashboard", "Dashboard", "/admin/dashboard")
                .with_permission("dashboard:read"),
            MenuEntry::group(
                "catalog",
                "Catalog",
                vec![
                    MenuEntry::link("products", "Products", "/admin/products")
                        .with_permission("product:read"),
                    MenuEntry::link("brands", "Brands", "/admin/brands")
                        .with_permission("brand:read"),
                ],
            )
            .with_permission("product:read"),
            MenuEntry::link("orders", "Orders", "/admin/orders").with_permission("order:read"),
            MenuEntry::link("account", "Account", "/admin/account"),
            MenuEntry::external("help", "Help", "https://help.invalid"),
        ]
    }

    #[test]
    fn group_survives_through_child_without_own_permission() {
        let items = vec![
            MenuEntry::link("dashboard", "Dashboard", "/admin/dashboard")
                .with_permission("dashboard:read"),
            MenuEntry::group(
                "auth",
                "Authorization",
                vec![
                    MenuEntry::link("roles", "Roles", "/admin/roles")
                        .with_permission("role_permission:assign"),
                ],
            )
            .with_permission("authorization:read"),
        ];
        let staff = session(Role::Staff, &["role_permission:assign"]);

        let filtered = filter_menu_items(&items, &staff);

        assert_eq!(keys(&filtered), vec!["auth"]);
        assert_eq!(keys(filtered[0].children().unwrap()), vec!["roles"]);
    }

    #[test]
    fn group_with_own_permission_but_no_visible_child_is_dropped() {
        let items = vec![
            MenuEntry::group(
                "auth",
                "Authorization",
                vec![
                    MenuEntry::link("roles", "Roles", "/admin/roles")
                        .with_permission("role_permission:assign"),
                ],
            )
            .with_permission("authorization:read"),
        ];
        let staff = session(Role::Staff, &["authorization:read"]);

        assert!(filter_menu_items(&items, &staff).is_empty());
    }

    #[test]
    fn empty_group_is_dropped_unless_untagged() {
        let items = vec![
            MenuEntry::group("reports", "Reports", vec![]).with_permission("report:read"),
            MenuEntry::group("misc", "Misc", vec![]),
        ];
        let staff = session(Role::Staff, &["report:read"]);

        assert_eq!(keys(&filter_menu_items(&items, &staff)), vec!["misc"]);
    }

    #[test]
    fn untagged_group_keeps_children_unfiltered() {
        let items = vec![MenuEntry::group(
            "settings",
            "Settings",
            vec![
                MenuEntry::link("store", "Store", "/admin/store").with_permission("store:read"),
                MenuEntry::link("account", "Account", "/admin/account"),
            ],
        )];
        let buyer = session(Role::Buyer, &[]);

        let filtered = filter_menu_items(&items, &buyer);

        assert_eq!(filtered, items);
    }

    #[test]
    fn admin_bypasses_filtering() {
        let admin = session(Role::Admin, &[]);
        let items = sample_tree();

        assert_eq!(filter_menu_items(&items, &admin), items);
    }

    #[test]
    fn keeps_relative_order_of_survivors() {
        let staff = session(Role::Staff, &["order:read", "brand:read"]);

        let filtered = filter_menu_items(&sample_tree(), &staff);

        assert_eq!(keys(&filtered), vec!["catalog", "orders", "account", "help"]);
        assert_eq!(keys(filtered[0].children().unwrap()), vec!["brands"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let sessions = [
            session(Role::Staff, &["order:read", "brand:read"]),
            session(Role::Manager, &["product:read", "dashboard:read"]),
            session(Role::Seller, &[]),
            session(Role::Admin, &[]),
        ];

        for current in &sessions {
            let once = filter_menu_items(&sample_tree(), current);
            let twice = filter_menu_items(&once, current);
            assert_eq!(once, twice, "role {}", current.role());
        }
    }

    #[test]
    fn empty_scope_keeps_only_untagged_entries() {
        let seller = session(Role::Seller, &[]);

        let filtered = filter_menu_items(&sample_tree(), &seller);

        assert_eq!(keys(&filtered), vec!["account", "help"]);
    }
}
