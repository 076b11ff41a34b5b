use serde_json::{json, Value};

pub(super) const PARAMETERS: &[&str] = &["Url"];

/// Log forwarding endpoint (syslog, papertrail, fluentd)
///
/// The endpoint is kept in SSM so app stacks can look it up when linking.
pub(super) fn template(kind: &str) -> Value {
    json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Parameters": {
            "Url": {
                "Type": "String",
                "Description": format!("{kind} endpoint URL")
            }
        },
        "Resources": {
            "Endpoint": {
                "Type": "AWS::SSM::Parameter",
                "Properties": {
                    "Name": {"Fn::Sub": "/${AWS::StackName}/url"},
                    "Type": "String",
                    "Value": {"Ref": "Url"},
                    "Description": format!("{kind} log forwarding endpoint")
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
