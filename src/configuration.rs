use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub jwt: JWTSettings
}

#[derive(Deserialize, Debug)]
pub struct ApplicationSettings{
    pub host: String,
    pub port: u16
}

#[derive(Deserialize, Debug)]
pub struct DatabaseSettings{
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub name: String,
    pub timeout_seconds: u64
}

impl DatabaseSettings {
    // Connection string of the server without selecting a database
    pub fn get_database_url(&self) -> String{
        format!(
            "postgres://{}:{}@{}:{}",
            self.username,
            self.password.expose_secret(),
            self.host,
            self.port
        )
    }

    // Connection string of the configured database
    pub fn get_database_table_url(&self) -> String{
        format!("{}/{}", self.get_database_url(), self.name)
    }

    pub fn query_timeout(&self) -> Duration{
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Deserialize, Debug)]
pub struct JWTSettings{
    pub secret: SecretString,
    pub access_expiry_hours: u64,
    pub refresh_expiry_hours: u64
}

impl Settings{
    /// Layers, lowest priority first: built-in defaults, `configuration/base.yaml`
    /// (optional), `APP_*` variables (`APP_DATABASE__HOST`), then the plain
    /// `PORT` and `SECRET_KEY` variables.
    pub fn get() -> Result<Self, ConfigError>{
        let mut builder = Config::builder()
            .set_default("application.host", "127.0.0.1")?
            .set_default("application.port", 8000)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.username", "postgres")?
            .set_default("database.password", "password")?
            .set_default("database.name", "hotel")?
            .set_default("database.timeout_seconds", 30)?
            .set_default("jwt.access_expiry_hours", 24)?
            .set_default("jwt.refresh_expiry_hours", 168)?
            .add_source(File::with_name("configuration/base.yaml").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
            );

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("application.port", port)?;
        }

        if let Ok(secret) = std::env::var("SECRET_KEY") {
            builder = builder.set_override("jwt.secret", secret)?;
        }

        builder.build()?.try_deserialize::<Settings>()
    }
}
