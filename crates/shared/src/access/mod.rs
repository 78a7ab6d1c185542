mod guard;
mod menu;
mod permission;

pub mod permissions;

pub use self::guard::{GuardState, LOGIN_ROUTE, UNAUTHORIZED_ROUTE, evaluate_route};
pub use self::menu::filter_menu_items;
pub use self::permission::{has_all_permissions, has_any_permission, has_permission};
