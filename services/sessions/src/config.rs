/// Sessions service configuration loaded from environment variables.
#[derive(Debug)]
pub struct SessionsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Run pending migrations at startup (default true). Env var:
    /// `SESSIONS_MIGRATE_ON_START`, set to "false" or "0" to skip.
    pub migrate_on_start: bool,
}

impl SessionsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            migrate_on_start: std::env::var("SESSIONS_MIGRATE_ON_START")
                .map(|v| !matches!(v.as_str(), "false" | "0"))
                .unwrap_or(true),
        }
    }
}
