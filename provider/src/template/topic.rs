use serde_json::{json, Value};

pub(super) const PARAMETERS: &[&str] = &["Queue"];

pub(super) fn template() -> Value {
    json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Conditions": {
            "BlankQueue": {"Fn::Equals": [{"Ref": "Queue"}, ""]}
        },
        "Parameters": {
            "Queue": {
                "Type": "String",
                "Default": "",
                "Description": "ARN of an SQS queue to subscribe to the topic"
            }
        },
        "Resources": {
            "Topic": {
                "Type": "AWS::SNS::Topic",
                "Properties": {
                    "Subscription": {
                        "Fn::If": [
                            "BlankQueue",
                            {"Ref": "AWS::NoValue"},
                            [{"Protocol": "sqs", "Endpoint": {"Ref": "Queue"}}]
                        ]
                    }
                }
            }
        },
        "Outputs": {
            "Topic": {"Value": {"Ref": "Topic"}}
        }
    })
}
