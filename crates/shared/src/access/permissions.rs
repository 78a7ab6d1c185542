pub const DASHBOARD_READ: &str = "dashboard:read";

pub const PRODUCT_READ: &str = "product:read";
pub const PRODUCT_CREATE: &str = "product:create";
pub const PRODUCT_UPDATE: &str = "product:update";
pub const PRODUCT_DELETE: &str = "product:delete";

pub const CATEGORY_READ: &str = "category:read";
pub const CATEGORY_CREATE: &str = "category:create";
pub const CATEGORY_UPDATE: &str = "category:update";
pub const CATEGORY_DELETE: &str = "category:delete";

pub const BRAND_READ: &str = "brand:read";
pub const BRAND_CREATE: &str = "brand:create";
pub const BRAND_UPDATE: &str = "brand:update";
pub const BRAND_DELETE: &str = "brand:delete";

pub const STOCK_READ: &str = "stock:read";
pub const STOCK_UPDATE: &str = "stock:update";

pub const ORDER_READ: &str = "order:read";
pub const ORDER_UPDATE: &str = "order:update";
pub const ORDER_DELETE: &str = "order:delete";

pub const CUSTOMER_READ: &str = "customer:read";
pub const CUSTOMER_UPDATE: &str = "customer:update";

pub const USER_READ: &str = "user:read";
pub const USER_CREATE: &str = "user:create";
pub const USER_UPDATE: &str = "user:update";
pub const USER_DELETE: &str = "user:delete";

pub const AUTHORIZATION_READ: &str = "authorization:read";
pub const ROLE_PERMISSION_ASSIGN: &str = "role_permission:assign";

pub const STORE_READ: &str = "store:read";
pub const STORE_UPDATE: &str = "store:update";

pub const ACTIVITY_READ: &str = "activity:read";

pub const ALL_PERMISSIONS: &[&str] = &[
    DASHBOARD_READ,
    PRODUCT_READ,
    PRODUCT_CREATE,
    PRODUCT_UPDATE,
    PRODUCT_DELETE,
    CATEGORY_READ,
    CATEGORY_CREATE,
    CATEGORY_UPDATE,
    CATEGORY_DELETE,
    BRAND_READ,
    BRAND_CREATE,
    BRAND_UPDATE,
    BRAND_DELETE,
    STOCK_READ,
    STOCK_UPDATE,
    ORDER_READ,
    ORDER_UPDATE,
    ORDER_DELETE,
    CUSTOMER_READ,
    CUSTOMER_UPDATE,
    USER_READ,
    USER_CREATE,
    USER_UPDATE,
    USER_DELETE,
    AUTHORIZATION_READ,
    ROLE_PERMISSION_ASSIGN,
    STORE_READ,
    STORE_UPDATE,
    ACTIVITY_READ,
];

pub fn is_known_permission(permission: &str) -> bool {
    ALL_PERMISSIONS.contains(&permission)
}
