//! Remote operations the provider needs from the cloud
//!
//! [`StackClient`] is the seam between the translation logic and AWS:
//! [`aws::AwsClient`] implements it with the AWS SDK, tests swap in stubs.

pub mod aws;

use async_trait::async_trait;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A stack as CloudFormation describes it
///
/// Outputs, parameters and tags keep the order of the response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackDescription {
    pub name: String,
    pub status: String,
    pub status_reason: String,
    pub outputs: Vec<KeyValue>,
    pub parameters: Vec<KeyValue>,
    pub tags: Vec<KeyValue>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Iam,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Iam => "CAPABILITY_IAM",
        }
    }
}

/// Request to create a stack
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateStack {
    pub name: String,
    pub template_body: String,
    pub parameters: Vec<KeyValue>,
    pub tags: Vec<KeyValue>,
    pub capabilities: Vec<Capability>,
}

/// Message for a notification topic
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Publish {
    pub topic_arn: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("stack {0} does not exist")]
    NotFound(String),

    /// Any other failure, with the message reported by AWS
    #[error("{0}")]
    Failed(String),
}

#[async_trait]
pub trait StackClient: Send + Sync {
    /// Describe the named stack, or every stack when no name is given
    async fn describe_stacks(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<StackDescription>, ClientError>;

    /// Submit a stack for creation, returns the stack id
    async fn create_stack(&self, request: &CreateStack) -> Result<String, ClientError>;

    /// Publish to a notification topic, returns the message id
    async fn publish(&self, request: &Publish) -> Result<String, ClientError>;
}
