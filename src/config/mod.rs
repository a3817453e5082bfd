use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub token_ttl_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub environment: String,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    pub client: ClientConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default values
            .set_default("environment", "development")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 2000)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("cors.enabled", false)?
            .set_default("cors.allowed_origin", "http://localhost:8080")?
            .set_default("auth.token_ttl_hours", 24)?
            .set_default("client.api_base_url", "http://127.0.0.1:2000")?
            // Add in settings from the config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in settings from environment variables (with prefix "APP_")
            // E.g., `APP_SERVER__PORT=5001` would set `Settings.server.port`
            .add_source(
                Environment::with_prefix("app")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.client.api_base_url).map_err(|e| {
            ConfigError::Message(format!(
                "client.api_base_url is not a valid URL ({}): {}",
                self.client.api_base_url, e
            ))
        })?;
        Ok(())
    }

    #[cfg(test)]
    pub fn new_for_test() -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("environment", "test")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 2000)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("cors.enabled", false)?
            .set_default("cors.allowed_origin", "http://localhost:8080")?
            .set_default("auth.token_ttl_hours", 1)?
            .set_default("client.api_base_url", "http://127.0.0.1:2000")?
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}
