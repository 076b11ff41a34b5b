use serde_json::{json, Value};

pub(super) const PARAMETERS: &[&str] = &["Versioning"];

pub(super) fn template() -> Value {
    json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Conditions": {
            "Versioning": {"Fn::Equals": [{"Ref": "Versioning"}, "true"]}
        },
        "Parameters": {
            "Versioning": {
                "Type": "String",
                "Default": "",
                "Description": "Keep every version of stored objects when set to true"
            }
        },
        "Resources": {
            "Bucket": {
                "Type": "AWS::S3::Bucket",
                "DeletionPolicy": "Retain",
                "Properties": {
                    "VersioningConfiguration": {
                        "Fn::If": ["Versioning", {"Status": "Enabled"}, {"Ref": "AWS::NoValue"}]
                    }
                }
            }
        },
        "Outputs": {
            "Bucket": {"Value": {"Ref": "Bucket"}}
        }
    })
}
