// Upstream
pub const PRODUCTION_API: &str = "https://api.tratechbd.com";
pub const IMAGE_UPLOAD_PATH: &str = "/api/v1/product/uploadImage";
// The upstream really spells it this way.
pub const VIDEO_UPLOAD_PATH: &str = "/api/v1/product/uploadVedio";

// Gateway routes
pub const LOCAL_PROXY_PATH: &str = "/api/proxy";

// Features
pub const PC_BUILDER: &str = "pcBuilder";

// Client store keys
pub const ORDERS_KEY: &str = "orders";
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";
pub const CLIENT_ID_KEY: &str = "clientId";

// Roles
pub const CUSTOMER: &str = "customer";
pub const ADMIN: &str = "admin";
pub const VENDOR: &str = "vendor";

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const FLAGS_TAG: &str = "Flags";
