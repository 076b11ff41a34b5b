//! Webhook creation protocol
//!
//! A webhook is created in two steps that commit independently: the stack
//! subscribing the webhook URL to the notification topic, then a
//! `service:create` event published on that topic. A failed publish leaves
//! the stack in place and is reported as [`Error::Publish`].

use crate::client::Publish;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::Provider;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Characters left as is in a query value
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const ACTION_CREATE: &str = "service:create";

/// Timestamp sent when the event time is unknown
const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

/// URL SNS delivers to, forwarding to the caller's URL
pub fn endpoint(config: &Config, url: &str) -> String {
    format!(
        "{}?endpoint={}",
        config.notifications_endpoint(),
        utf8_percent_encode(url, QUERY)
    )
}

/// Rack event as published on the notification topic
///
/// Field order is part of the wire format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub action: String,
    pub status: String,
    pub data: BTreeMap<String, String>,
    #[serde(serialize_with = "rfc3339")]
    pub timestamp: Option<DateTime<Utc>>,
}

fn rfc3339<S: Serializer>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match timestamp {
        Some(timestamp) => {
            serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        None => serializer.serialize_str(ZERO_TIME),
    }
}

impl Event {
    pub fn created(resource: &Resource, timestamp: Option<DateTime<Utc>>) -> Self {
        Event {
            action: ACTION_CREATE.into(),
            status: "success".into(),
            data: BTreeMap::from([
                ("name".to_string(), resource.name.clone()),
                ("type".to_string(), resource.kind.clone()),
            ]),
            timestamp,
        }
    }
}

impl Provider {
    /// Announce a freshly created webhook on the notification topic
    pub(crate) async fn publish_created(&self, resource: Resource) -> Result<Resource> {
        let event = Event::created(&resource, (self.clock)());

        let message = match serde_json::to_string(&event) {
            Ok(message) => message,
            Err(e) => return Err(Error::publish(resource, e.to_string())),
        };

        let request = Publish {
            topic_arn: self.config.notification_topic.clone(),
            subject: event.action,
            message,
        };

        match self.client.publish(&request).await {
            Ok(message_id) => {
                info!(
                    "Published {} for {} as {message_id}",
                    request.subject, resource.name
                );
                Ok(resource)
            }

            Err(e) => {
                warn!(
                    "Stack {} was created but publishing {} failed: {e}",
                    resource.stack, request.subject
                );
                Err(Error::publish(resource, e.to_string()))
            }
        }
    }
}
