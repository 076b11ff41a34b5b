use serde::Serialize;
use std::collections::BTreeMap;

/// A rack resource, projected from its CloudFormation stack
///
/// Built fresh on every read, nothing here is cached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Stack name without the rack prefix
    pub name: String,
    pub stack: String,
    pub status: String,
    pub status_reason: String,

    /// Resource type from the `Resource` tag, e.g. `webhook`
    #[serde(rename = "type")]
    pub kind: String,

    /// Apps linked to the resource, empty when none are
    pub apps: Vec<App>,
    pub exports: BTreeMap<String, String>,
    pub outputs: BTreeMap<String, String>,
    pub parameters: BTreeMap<String, String>,
    pub tags: BTreeMap<String, String>,
}

pub type Resources = Vec<Resource>;

/// An app using a resource
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct App {
    pub name: String,
    pub release: String,
    pub status: String,
    pub outputs: BTreeMap<String, String>,
    pub parameters: BTreeMap<String, String>,
    pub tags: BTreeMap<String, String>,
}
