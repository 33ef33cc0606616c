use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, layered as built-in defaults overridden by
/// `TRIVIA_*` environment variables (e.g. `TRIVIA_DATABASE_URL`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:trivia.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("TRIVIA_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TRIVIA_DATABASE_URL", "sqlite::memory:");
            jail.set_env("TRIVIA_MAX_CONNECTIONS", "1");

            let cfg = Config::load()?;
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.max_connections, 1);
            assert_eq!(cfg.listen_addr, Config::default().listen_addr);
            Ok(())
        });
    }
}
