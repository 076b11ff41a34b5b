//! Resource types the rack can create
//!
//! Each type owns a CloudFormation template, the parameters that template
//! takes, and the way its exports are read back.

mod bucket;
mod logs;
mod queue;
mod topic;
mod webhook;

use crate::config::Config;
use crate::error::{Error, Result};
use rack_common::template::sanitize::parameter_name;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Webhook,
    Syslog,
    Papertrail,
    Fluentd,
    Sqs,
    S3,
    Sns,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Webhook,
        ResourceKind::Syslog,
        ResourceKind::Papertrail,
        ResourceKind::Fluentd,
        ResourceKind::Sqs,
        ResourceKind::S3,
        ResourceKind::Sns,
    ];

    pub fn parse(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Webhook => "webhook",
            ResourceKind::Syslog => "syslog",
            ResourceKind::Papertrail => "papertrail",
            ResourceKind::Fluentd => "fluentd",
            ResourceKind::Sqs => "sqs",
            ResourceKind::S3 => "s3",
            ResourceKind::Sns => "sns",
        }
    }

    /// Parameters declared by the template
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Webhook => webhook::PARAMETERS,
            ResourceKind::Syslog | ResourceKind::Papertrail | ResourceKind::Fluentd => {
                logs::PARAMETERS
            }
            ResourceKind::Sqs => queue::PARAMETERS,
            ResourceKind::S3 => bucket::PARAMETERS,
            ResourceKind::Sns => topic::PARAMETERS,
        }
    }

    /// Schemes accepted for the `Url` parameter, empty when the type has no URL
    fn schemes(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Webhook => &["http", "https"],
            ResourceKind::Syslog => &["tcp", "tcp+tls", "udp"],
            ResourceKind::Papertrail => &["udp"],
            ResourceKind::Fluentd => &["tcp"],
            _ => &[],
        }
    }

    pub fn template(&self) -> Value {
        match self {
            ResourceKind::Webhook => webhook::template(),
            ResourceKind::Syslog | ResourceKind::Papertrail | ResourceKind::Fluentd => {
                logs::template(self.as_str())
            }
            ResourceKind::Sqs => queue::template(),
            ResourceKind::S3 => bucket::template(),
            ResourceKind::Sns => topic::template(),
        }
    }

    /// Template body as sent to CloudFormation
    pub fn render(&self) -> String {
        format!("{:#}", self.template())
    }

    /// Build the stack parameters out of the ones supplied by a caller
    ///
    /// Keys are turned into their template form, every declared parameter the
    /// caller left out is sent as an empty string.
    pub fn prepare(
        &self,
        config: &Config,
        supplied: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>> {
        let mut parameters: BTreeMap<String, String> = self
            .parameters()
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();

        for (key, value) in supplied {
            let name = parameter_name(key);

            if *self == ResourceKind::Webhook && webhook::WIRED.contains(&name.as_str()) {
                return Err(Error::Validation(format!(
                    "{key} is set by the rack and cannot be passed for webhook"
                )));
            }

            match parameters.get_mut(&name) {
                Some(slot) => *slot = value.clone(),
                None => {
                    return Err(Error::Validation(format!(
                        "invalid parameter for {}: {key}",
                        self.as_str()
                    )))
                }
            }
        }

        if !self.schemes().is_empty() {
            let url = parameters.get("Url").map(String::as_str).unwrap_or_default();
            self.validate_url(url)?;
        }

        if *self == ResourceKind::Webhook {
            webhook::wire(config, &mut parameters);
        }

        Ok(parameters)
    }

    fn validate_url(&self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation(format!(
                "{} requires a url parameter",
                self.as_str()
            )));
        }

        let url = url::Url::parse(value)
            .map_err(|e| Error::Validation(format!("invalid url {value}: {e}")))?;

        if !self.schemes().contains(&url.scheme()) {
            return Err(Error::Validation(format!(
                "invalid url scheme for {}: {} (expected one of {})",
                self.as_str(),
                url.scheme(),
                self.schemes().join(", ")
            )));
        }

        Ok(())
    }

    /// Values apps need in order to use the resource
    pub fn exports(
        &self,
        outputs: &BTreeMap<String, String>,
        parameters: &BTreeMap<String, String>,
    ) -> BTreeMap<String, String> {
        let (export, value) = match self {
            ResourceKind::Sqs => ("URL", outputs.get("Queue")),
            ResourceKind::S3 => ("NAME", outputs.get("Bucket")),
            ResourceKind::Sns => ("ARN", outputs.get("Topic")),
            _ => ("URL", parameters.get("Url")),
        };

        value
            .filter(|value| !value.is_empty())
            .map(|value| BTreeMap::from([(export.to_string(), value.clone())]))
            .unwrap_or_default()
    }
}
