use zootaxi_notify::NotifyConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Outbound notification credentials (Telegram bot token, SMTP).
    pub notify: NotifyConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Required | Default   |
    /// |------------------------|----------|-----------|
    /// | `DATABASE_URL`         | yes      | —         |
    /// | `HOST`                 | no       | `0.0.0.0` |
    /// | `PORT`                 | no       | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`      |
    /// | `TELEGRAM_BOT_TOKEN`   | no       | —         |
    /// | `SMTP_HOST`            | no       | —         |
    /// | `SMTP_PORT`            | no       | `587`     |
    /// | `SMTP_USER`            | no       | —         |
    /// | `SMTP_PASSWORD`        | no       | —         |
    ///
    /// Panics when `DATABASE_URL` is missing or a numeric variable fails
    /// to parse; misconfiguration should fail fast at startup.
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

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        Self {
            host,
            port,
            request_timeout_secs,
            database_url,
            notify: NotifyConfig::from_env(),
        }
    }
}
