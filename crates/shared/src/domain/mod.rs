mod menu;
mod route;
mod session;

pub mod responses;

pub use self::menu::{MenuEntry, MenuGroup, MenuLink, validate_menu};
pub use self::route::RouteRequirement;
pub use self::session::{Role, Scope, UserSession};
