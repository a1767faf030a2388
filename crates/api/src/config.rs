/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session cookie configuration (secret, lifetime).
    pub session: SessionConfig,
    /// Bootstrap admin credentials used when the user table is empty.
    pub bootstrap: BootstrapAdmin,
}

/// Configuration for session token generation and validation.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub secret: String,
    /// Session lifetime in hours (default: 24).
    pub ttl_hours: i64,
}

/// Credentials for the opportunistically created first admin account.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

/// Default session lifetime in hours.
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Required | Default     |
    /// |----------------------------|----------|-------------|
    /// | `HOST`                     | no       | `0.0.0.0`   |
    /// | `PORT`                     | no       | `3000`      |
    /// | `REQUEST_TIMEOUT_SECS`     | no       | `30`        |
    /// | `SESSION_SECRET`           | **yes**  | --          |
    /// | `SESSION_TTL_HOURS`        | no       | `24`        |
    /// | `ADMIN_BOOTSTRAP_USERNAME` | no       | `admin123`  |
    /// | `ADMIN_BOOTSTRAP_PASSWORD` | no       | `admiN@123` |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty -- the server must
    /// not start with forgeable sessions.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            request_timeout_secs,
            session: SessionConfig::from_env(),
            bootstrap: BootstrapAdmin::from_env(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");

        Self { secret, ttl_hours }
    }
}

impl BootstrapAdmin {
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_BOOTSTRAP_USERNAME")
                .unwrap_or_else(|_| "admin123".into()),
            password: std::env::var("ADMIN_BOOTSTRAP_PASSWORD")
                .unwrap_or_else(|_| "admiN@123".into()),
        }
    }
}
