use std::env;
use std::net::SocketAddr;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::endpoints::EndpointMap;

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: SocketAddr,
    pub user_agent: String,
}

/// Business contact details shown on the landing page.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Digits only, interpolated into `tel:` and WhatsApp links.
    pub phone: String,
    pub display_phone: String,
    pub city: String,
}

impl ContactConfig {
    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.phone)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub endpoints: EndpointMap,
    pub contact: ContactConfig,
}

impl Config {
    /// Loads `config/default.yaml`, the `RUN_ENV` specific file, `config/local.yaml`
    /// and finally `APP__*` environment variables, later sources winning.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            _ => "dev",
        };

        let builder = with_defaults(config::Config::builder())?
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{config_file}.yaml")).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        with_defaults(config::Config::builder())?
            .add_source(File::from_str(source, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("logging.level", "info")?
        .set_default("http.bind", "0.0.0.0:8080")?
        .set_default(
            "http.user_agent",
            concat!("newsdesk/", env!("CARGO_PKG_VERSION")),
        )?
        .set_default("contact.phone", "89146666764")?
        .set_default("contact.display_phone", "8 (914) 666-67-64")?
        .set_default("contact.city", "Город Артём, Приморский край")
}
