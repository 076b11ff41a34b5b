use eyre::{ContextCompat, WrapErr};
use serde::Deserialize;
use std::path::Path;

/// Rack level settings the provider works with
///
/// Passed into [`crate::Provider::new`] explicitly, nothing is read from
/// the environment once the provider is built.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Rack name, also the prefix of every stack the rack manages
    #[serde(default = "default_rack")]
    pub rack: String,

    /// Host receiving SNS deliveries for webhooks
    pub notification_host: String,

    /// Topic rack events are published to
    #[serde(default)]
    pub notification_topic: String,

    /// Service token of the custom resource subscribing webhooks to the topic
    #[serde(default)]
    pub custom_topic: String,
}

fn default_rack() -> String {
    "convox".into()
}

impl Config {
    pub fn new(rack: &str, notification_host: &str) -> Self {
        Config {
            rack: rack.into(),
            notification_host: notification_host.into(),
            notification_topic: String::new(),
            custom_topic: String::new(),
        }
    }

    /// Read the config from environment variables
    pub fn from_env() -> eyre::Result<Self> {
        let mut config = Config::new(
            &default_rack(),
            &std::env::var("NOTIFICATION_HOST")
                .ok()
                .wrap_err("NOTIFICATION_HOST is missing")?,
        );

        config.apply(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Read the config from a TOML file, environment variables take precedence
    pub fn from_file(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err(format!("Failed to read config file: {path:?}"))?;

        let mut config: Config =
            toml::from_str(&content).wrap_err("Failed to parse config file")?;

        config.apply(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Override values with the variables found by `lookup`
    fn apply(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for (name, value) in [
            ("RACK", &mut self.rack),
            ("NOTIFICATION_HOST", &mut self.notification_host),
            ("NOTIFICATION_TOPIC", &mut self.notification_topic),
            ("CUSTOM_TOPIC", &mut self.custom_topic),
        ] {
            if let Some(found) = lookup(name) {
                *value = found;
            }
        }
    }

    /// Endpoint SNS delivers webhook notifications to
    pub fn notifications_endpoint(&self) -> String {
        format!("http://{}/sns", self.notification_host)
    }
}
