use super::{ClientError, CreateStack, KeyValue, Publish, StackClient, StackDescription};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudformation::types::{Capability, Parameter, Stack, StackStatus, Tag};
use log::debug;

/// Stack client backed by CloudFormation and SNS
#[derive(Clone, Debug)]
pub struct AwsClient {
    cloudformation: aws_sdk_cloudformation::Client,
    sns: aws_sdk_sns::Client,
}

impl AwsClient {
    /// Build clients from the default credential and region chain
    pub async fn new() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::from_config(&config)
    }

    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        AwsClient {
            cloudformation: aws_sdk_cloudformation::Client::new(config),
            sns: aws_sdk_sns::Client::new(config),
        }
    }
}

/// Owned text out of an SDK getter, missing values become empty strings
fn text<'a>(value: impl Into<Option<&'a str>>) -> String {
    value.into().unwrap_or_default().to_string()
}

/// Message of a failed call as AWS reported it
fn failure<E: ProvideErrorMetadata + std::error::Error>(error: &E) -> ClientError {
    ClientError::Failed(
        error
            .message()
            .map(String::from)
            .unwrap_or_else(|| DisplayErrorContext(error).to_string()),
    )
}

fn describe(stack: &Stack) -> StackDescription {
    let status: Option<&StackStatus> = stack.stack_status().into();

    StackDescription {
        name: text(stack.stack_name()),
        status: status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        status_reason: text(stack.stack_status_reason()),
        outputs: stack
            .outputs()
            .iter()
            .map(|o| KeyValue::new(text(o.output_key()), text(o.output_value())))
            .collect(),
        parameters: stack
            .parameters()
            .iter()
            .map(|p| KeyValue::new(text(p.parameter_key()), text(p.parameter_value())))
            .collect(),
        tags: stack
            .tags()
            .iter()
            .map(|t| KeyValue::new(text(t.key()), text(t.value())))
            .collect(),
    }
}

#[async_trait]
impl StackClient for AwsClient {
    async fn describe_stacks(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<StackDescription>, ClientError> {
        let mut stacks = vec![];
        let mut next_token = None;

        loop {
            debug!("Calling DescribeStacks for {:?}", name.unwrap_or("all stacks"));

            let result = self
                .cloudformation
                .describe_stacks()
                .set_stack_name(name.map(String::from))
                .set_next_token(next_token)
                .send()
                .await;

            let response = match result {
                Ok(response) => response,

                // CloudFormation reports a missing stack as a validation error
                Err(SdkError::ServiceError(err))
                    if err.err().meta().code() == Some("ValidationError")
                        && err
                            .err()
                            .meta()
                            .message()
                            .is_some_and(|m| m.contains("does not exist")) =>
                {
                    return Err(ClientError::NotFound(name.unwrap_or_default().into()));
                }

                Err(e) => return Err(failure(&e)),
            };

            stacks.extend(response.stacks().iter().map(describe));
            next_token = response.next_token().map(String::from);

            if next_token.is_none() {
                break;
            }
        }

        Ok(stacks)
    }

    async fn create_stack(&self, request: &CreateStack) -> Result<String, ClientError> {
        let tags = request
            .tags
            .iter()
            .map(|tag| Tag::builder().key(&tag.key).value(&tag.value).build())
            .collect::<Vec<_>>();

        debug!("Calling CreateStack for {}", request.name);

        let response = self
            .cloudformation
            .create_stack()
            .stack_name(&request.name)
            .template_body(&request.template_body)
            .set_parameters(Some(
                request
                    .parameters
                    .iter()
                    .map(|p| {
                        Parameter::builder()
                            .parameter_key(&p.key)
                            .parameter_value(&p.value)
                            .build()
                    })
                    .collect(),
            ))
            .set_tags(Some(tags))
            .set_capabilities(Some(
                request
                    .capabilities
                    .iter()
                    .map(|c| Capability::from(c.as_str()))
                    .collect(),
            ))
            .send()
            .await
            .map_err(|e| failure(&e))?;

        Ok(text(response.stack_id()))
    }

    async fn publish(&self, request: &Publish) -> Result<String, ClientError> {
        debug!("Calling Publish on {:?}", request.topic_arn);

        let response = self
            .sns
            .publish()
            .target_arn(&request.topic_arn)
            .subject(&request.subject)
            .message(&request.message)
            .send()
            .await
            .map_err(|e| failure(&e))?;

        Ok(text(response.message_id()))
    }
}
