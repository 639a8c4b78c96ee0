// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "storefront";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "storefront.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "STOREFRONT_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "STOREFRONT_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "STOREFRONT_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "STOREFRONT_LOG";

// =============================================================================
// Environment Variables - Database
// =============================================================================

/// Environment variable for the PostgreSQL connection URL
pub const ENV_DATABASE_URL: &str = "STOREFRONT_DATABASE_URL";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5180;

// =============================================================================
// PostgreSQL Pool Defaults
// =============================================================================

/// Maximum connections in the pool
pub const POSTGRES_DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Minimum connections kept warm
pub const POSTGRES_DEFAULT_MIN_CONNECTIONS: u32 = 2;

/// Connection acquire timeout in seconds
pub const POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Idle connection timeout in seconds
pub const POSTGRES_DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;

/// Max connection lifetime in seconds
pub const POSTGRES_DEFAULT_MAX_LIFETIME_SECS: u64 = 1800;

/// Statement timeout in seconds (0 disables)
pub const POSTGRES_DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// Shutdown
// =============================================================================

/// Seconds to wait for background tasks during shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Request Limits
// =============================================================================

/// Default JSON body limit in bytes
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Maximum filter options accepted in one filter_products request
pub const MAX_FILTER_OPTIONS: usize = 64;
