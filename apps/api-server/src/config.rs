//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

#[cfg(feature = "postgres")]
use quill_infra::database::DatabaseConfig;
use quill_infra::ProviderCredentials;

/// Default JSON body limit, 1 MiB.
const DEFAULT_JSON_LIMIT: usize = 1024 * 1024;

/// Deployment environment. Only `Development` exposes error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            _ => Environment::Production,
        }
    }
}

/// Operator login, taken from `AUTH_USERNAME` / `AUTH_PASSWORD`.
#[derive(Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub cors_origin: Option<String>,
    pub json_limit: usize,
    pub auth: Option<AuthConfig>,
    pub providers: ProviderCredentials,
    pub content_config_path: PathBuf,
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = non_empty("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS").unwrap_or(100),
            min_connections: parsed("DB_MIN_CONNECTIONS").unwrap_or(10),
        });

        let auth = match (non_empty("AUTH_USERNAME"), non_empty("AUTH_PASSWORD")) {
            (Some(username), Some(password)) => Some(AuthConfig { username, password }),
            _ => None,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT").unwrap_or(4000),
            environment: env::var("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Production),
            #[cfg(feature = "postgres")]
            database,
            cors_origin: non_empty("CORS_ORIGIN"),
            json_limit: parsed("JSON_LIMIT").unwrap_or(DEFAULT_JSON_LIMIT),
            auth,
            providers: ProviderCredentials {
                groq: non_empty("GROQ_API_KEY"),
                openrouter: non_empty("OPENROUTER_API_KEY"),
                together: non_empty("TOGETHER_API_KEY"),
            },
            content_config_path: env::var("CONTENT_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config/content.json")),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" DEV "), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("staging"), Environment::Production);
    }
}
