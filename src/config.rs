use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. When unset the API runs on the in-memory
    /// store (demo data only, nothing survives a restart).
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Public origin of the site, e.g. "https://borseclasses.in".
    /// Localhost origins are always allowed for development.
    pub app_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            app_base_url: env::var("APP_BASE_URL").ok().filter(|s| !s.is_empty()),
        })
    }
}
