use crate::config::Config;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub(super) const PARAMETERS: &[&str] = &["Url", "CustomTopic", "NotificationTopic"];

/// Parameters filled from the rack config, never by callers
pub(super) const WIRED: &[&str] = &["CustomTopic", "NotificationTopic"];

/// Subscribe the caller's URL to the rack notification topic
/// through the custom resource behind `CustomTopic`
pub(super) fn template() -> Value {
    json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Parameters": {
            "Url": {
                "Type": "String",
                "Description": "Webhook URL, e.g. 'https://grid.convox.com/rack-hook/1234'"
            },
            "CustomTopic": {
                "Type": "String",
                "Description": ""
            },
            "NotificationTopic": {
                "Type": "String",
                "Description": ""
            }
        },
        "Resources": {
            "Notifications": {
                "Type": "Custom::SNSSubscription",
                "Version": "1.0",
                "Properties": {
                    "ServiceToken": {"Ref": "CustomTopic"},
                    "TopicArn": {"Ref": "NotificationTopic"},
                    "Protocol": "http",
                    "Endpoint": {"Ref": "Url"}
                }
            }
        },
        "Outputs": {
            "Url": {
                "Value": {"Ref": "Url"}
            }
        }
    })
}

/// Point the subscription at the notifications endpoint and the rack topics
pub(super) fn wire(config: &Config, parameters: &mut BTreeMap<String, String>) {
    if let Some(url) = parameters.get_mut("Url") {
        *url = crate::webhook::endpoint(config, url);
    }

    parameters.insert("CustomTopic".into(), config.custom_topic.clone());
    parameters.insert("NotificationTopic".into(), config.notification_topic.clone());
}
