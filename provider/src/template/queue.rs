use serde_json::{json, Value};

pub(super) const PARAMETERS: &[&str] = &["MessageRetentionPeriod", "VisibilityTimeout"];

pub(super) fn template() -> Value {
    json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Conditions": {
            "BlankMessageRetentionPeriod": {"Fn::Equals": [{"Ref": "MessageRetentionPeriod"}, ""]},
            "BlankVisibilityTimeout": {"Fn::Equals": [{"Ref": "VisibilityTimeout"}, ""]}
        },
        "Parameters": {
            "MessageRetentionPeriod": {
                "Type": "String",
                "Default": "",
                "Description": "Seconds a message is kept in the queue"
            },
            "VisibilityTimeout": {
                "Type": "String",
                "Default": "",
                "Description": "Seconds a received message stays hidden from other consumers"
            }
        },
        "Resources": {
            "Queue": {
                "Type": "AWS::SQS::Queue",
                "Properties": {
                    "MessageRetentionPeriod": {
                        "Fn::If": ["BlankMessageRetentionPeriod", {"Ref": "AWS::NoValue"}, {"Ref": "MessageRetentionPeriod"}]
                    },
                    "VisibilityTimeout": {
                        "Fn::If": ["BlankVisibilityTimeout", {"Ref": "AWS::NoValue"}, {"Ref": "VisibilityTimeout"}]
                    }
                }
            }
        },
        "Outputs": {
            "Queue": {"Value": {"Ref": "Queue"}},
            "Arn": {"Value": {"Fn::GetAtt": ["Queue", "Arn"]}},
            "Name": {"Value": {"Fn::GetAtt": ["Queue", "QueueName"]}}
        }
    })
}
