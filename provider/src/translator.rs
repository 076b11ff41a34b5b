//! Creating resources as CloudFormation stacks

use crate::client::{Capability, ClientError, CreateStack, KeyValue};
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::template::ResourceKind;
use crate::Provider;
use log::{debug, info};
use rack_common::stack::status::{humanize, CREATE_IN_PROGRESS};
use rack_common::stack::tags::{Category, Tags};
use rack_common::stack::Stack;
use std::collections::BTreeMap;

/// Stack names start with a letter and hold letters, digits and hyphens only
fn validate_name(name: &str) -> Result<()> {
    let valid = name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(Error::Validation(format!("invalid resource name: {name:?}")))
    }
}

impl Provider {
    /// Fail unless no stack uses the name yet
    async fn ensure_absent(&self, name: &str, stack: &Stack) -> Result<()> {
        debug!("Checking {} is not taken", stack.name);

        match self.client.describe_stacks(Some(&stack.name)).await {
            Ok(stacks) if !stacks.is_empty() => Err(Error::Substrate(format!(
                "resource named {name} already exists"
            ))),
            Ok(_) | Err(ClientError::NotFound(_)) => Ok(()),
            Err(ClientError::Failed(message)) => Err(Error::Substrate(message)),
        }
    }

    /// Create a resource of the given type
    ///
    /// The returned resource echoes the request as sent, it is not read back.
    /// Webhooks are also announced on the notification topic, see [`crate::webhook`].
    pub async fn resource_create(
        &self,
        name: &str,
        kind: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<Resource> {
        let rack = &self.config.rack;

        let kind = ResourceKind::parse(kind)
            .ok_or_else(|| Error::Validation(format!("invalid resource type: {kind}")))?;

        validate_name(name)?;
        let parameters = kind.prepare(&self.config, parameters)?;
        let template_body = kind.render();

        let stack = Stack::new(rack, name);
        self.ensure_absent(name, &stack).await?;

        let tags = Tags {
            name,
            rack,
            resource: Some(kind.as_str()),
            category: Category::Resource,
        }
        .pairs();

        let request = CreateStack {
            name: stack.name.clone(),
            template_body,
            parameters: parameters
                .iter()
                .map(|(key, value)| KeyValue::new(key, value))
                .collect(),
            tags: tags
                .iter()
                .map(|(key, value)| KeyValue::new(key, value))
                .collect(),
            capabilities: vec![Capability::Iam],
        };

        let stack_id = self
            .client
            .create_stack(&request)
            .await
            .map_err(|e| Error::Substrate(e.to_string()))?;

        info!("Created stack {} ({stack_id})", stack.name);

        let resource = Resource {
            name: name.to_string(),
            stack: stack.name,
            status: humanize(CREATE_IN_PROGRESS).to_string(),
            status_reason: String::new(),
            kind: kind.as_str().to_string(),
            apps: vec![],
            exports: kind.exports(&BTreeMap::new(), &parameters),
            outputs: BTreeMap::new(),
            parameters,
            tags: tags.into_iter().collect(),
        };

        match kind {
            ResourceKind::Webhook => self.publish_created(resource).await,
            _ => Ok(resource),
        }
    }
}
