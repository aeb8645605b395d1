use std::env;
use std::fmt;

use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigBuilder as SourcesBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for contacts-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// PostgreSQL configuration. An empty URL selects the in-memory stores.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

fn default_max_connections() -> u32 {
    5
}

/// Token signing configuration.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

impl JwtConfig {
    /// Lifetime applied to every issued token.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.expiration_minutes)
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

fn default_expiration_minutes() -> i64 {
    15
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let sources = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Self::environment());

        Self::from_sources(sources)
    }

    /// Unprefixed environment source splitting nested keys on `__`.
    pub fn environment() -> Environment {
        Environment::default().separator("__")
    }

    /// Build and validate configuration from an assembled set of sources.
    pub fn from_sources(sources: SourcesBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = sources.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set (e.g. JWT__SECRET)".to_string(),
            ));
        }

        if self.jwt.expiration_minutes <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be positive, got {}",
                self.jwt.expiration_minutes
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;
    use config::Map;

    use super::*;

    fn from_toml(toml: &str) -> Result<Config, ConfigError> {
        Config::from_sources(ConfigBuilder::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = from_toml(
            r#"
            [server]
            http_port = 8000

            [jwt]
            secret = "test-secret-key-at-least-32-bytes-long"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.http_port, 8000);
        assert!(!config.database.is_configured());
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.jwt.expiration_minutes, 15);
        assert_eq!(config.jwt.token_ttl(), chrono::Duration::minutes(15));
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let result = from_toml(
            r#"
            [server]
            http_port = 8000

            [jwt]
            secret = ""
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_ttl_is_rejected() {
        let result = from_toml(
            r#"
            [server]
            http_port = 8000

            [jwt]
            secret = "test-secret-key-at-least-32-bytes-long"
            expiration_minutes = 0
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_environment_overrides_files() {
        let mut variables = Map::new();
        variables.insert(
            "JWT__SECRET".to_string(),
            "from-env-secret-key-at-least-32-bytes".to_string(),
        );
        variables.insert("SERVER__HTTP_PORT".to_string(), "9999".to_string());
        variables.insert("JWT__EXPIRATION_MINUTES".to_string(), "30".to_string());

        let config = Config::from_sources(
            ConfigBuilder::builder()
                .add_source(File::from_str(
                    r#"
                    [server]
                    http_port = 8000

                    [jwt]
                    secret = ""
                    "#,
                    FileFormat::Toml,
                ))
                .add_source(Config::environment().source(Some(variables))),
        )
        .unwrap();

        assert_eq!(config.jwt.secret, "from-env-secret-key-at-least-32-bytes");
        assert_eq!(config.server.http_port, 9999);
        assert_eq!(config.jwt.token_ttl(), chrono::Duration::minutes(30));
    }

    #[test]
    fn test_debug_hides_secret() {
        let jwt = JwtConfig {
            secret: "super-secret-value".to_string(),
            expiration_minutes: 15,
        };

        assert!(!format!("{:?}", jwt).contains("super-secret-value"));
    }
}
