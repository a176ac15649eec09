use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;

/// Environment variable holding the path of the settings file
pub const CONFIG_PATH_VAR: &str = "FULFILLMENT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "fulfillment.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// How the webhook answers.
#[derive(Debug, Clone, Deserialize)]
pub struct FulfillmentSettings {
    /// Reply for intents without a configured response
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,
    /// Reply text per intent display name
    #[serde(default)]
    pub responses: HashMap<String, String>,
    /// Send the incoming contexts back with every response
    #[serde(default)]
    pub keep_contexts: bool,
}

impl Default for FulfillmentSettings {
    fn default() -> Self {
        FulfillmentSettings {
            fallback_text: default_fallback_text(),
            responses: HashMap::new(),
            keep_contexts: false,
        }
    }
}

impl FulfillmentSettings {
    /// Reply text for an intent.
    ///
    /// Settings keys are lowercased when loaded, so the lookup falls back to
    /// the lowercased intent name.
    pub fn response_for(&self, intent: &str) -> &str {
        self.responses
            .get(intent)
            .or_else(|| self.responses.get(&intent.to_lowercase()))
            .unwrap_or(&self.fallback_text)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub fulfillment: FulfillmentSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config_path =
            env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        tracing::debug!("Loading settings from {}", config_path);

        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("fulfillment.fallback_text", default_fallback_text())?
            .set_default("fulfillment.keep_contexts", false)?
            .add_source(File::new(&config_path, FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("FULFILLMENT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_fallback_text() -> String {
    "Sorry, can you say that again?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("FULFILLMENT_") {
                env::remove_var(&key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();
        env::set_var(CONFIG_PATH_VAR, "does-not-exist.toml");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(
            settings.fulfillment.fallback_text,
            "Sorry, can you say that again?"
        );
        assert!(settings.fulfillment.responses.is_empty());
        assert!(!settings.fulfillment.keep_contexts);

        clean_env();
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        clean_env();
        env::set_var(CONFIG_PATH_VAR, "does-not-exist.toml");
        env::set_var("FULFILLMENT_SERVER__PORT", "9090");
        env::set_var("FULFILLMENT_FULFILLMENT__KEEP_CONTEXTS", "true");
        env::set_var("FULFILLMENT_FULFILLMENT__FALLBACK_TEXT", "Come again?");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.port, 9090);
        assert!(settings.fulfillment.keep_contexts);
        assert_eq!(settings.fulfillment.fallback_text, "Come again?");

        clean_env();
    }

    #[test]
    #[serial]
    fn test_settings_file() {
        clean_env();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 3001\n\n[fulfillment.responses]\ngreeting = \"Hi there!\""
        )
        .unwrap();
        env::set_var(CONFIG_PATH_VAR, file.path());

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.port, 3001);
        assert_eq!(settings.fulfillment.response_for("greeting"), "Hi there!");
        assert_eq!(
            settings.fulfillment.response_for("unknown"),
            "Sorry, can you say that again?"
        );

        clean_env();
    }

    #[test]
    fn test_response_lookup_ignores_case() {
        let mut fulfillment = FulfillmentSettings::default();
        fulfillment
            .responses
            .insert("default welcome intent".to_string(), "Welcome!".to_string());

        assert_eq!(fulfillment.response_for("Default Welcome Intent"), "Welcome!");
    }

    #[test]
    #[serial]
    fn test_mistyped_setting() {
        clean_env();
        env::set_var(CONFIG_PATH_VAR, "does-not-exist.toml");
        env::set_var("FULFILLMENT_SERVER__PORT", "not-a-port");

        assert!(matches!(Settings::new(), Err(ConfigError::Other(_))));

        clean_env();
    }

    #[test]
    fn test_socket_addr_conversion() {
        let server_settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        let addr = server_settings.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");

        let server_settings = ServerSettings {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(matches!(
            server_settings.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }
}
