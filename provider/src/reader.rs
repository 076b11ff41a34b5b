//! Reading resources back from CloudFormation

use crate::attacher::attach;
use crate::client::{ClientError, KeyValue, StackDescription};
use crate::error::{Error, Result};
use crate::resource::{App, Resource, Resources};
use crate::template::ResourceKind;
use crate::Provider;
use log::debug;
use rack_common::stack::status::humanize;
use rack_common::stack::tags::{self, is_managed, Category};
use rack_common::stack::{short_name, Stack};
use std::collections::BTreeMap;

const RESOURCE_CATEGORIES: &[Category] = &[Category::Resource, Category::Service];

/// Flatten key/value pairs, empty values are kept
fn pairs(items: &[KeyValue]) -> BTreeMap<String, String> {
    items
        .iter()
        .map(|item| (item.key.clone(), item.value.clone()))
        .collect()
}

pub(crate) fn tag_map(stack: &StackDescription) -> BTreeMap<String, String> {
    pairs(&stack.tags)
}

pub(crate) fn resource_from_stack(rack: &str, stack: &StackDescription) -> Resource {
    let tags = tag_map(stack);
    let outputs = pairs(&stack.outputs);
    let parameters = pairs(&stack.parameters);
    let kind = tags.get(tags::RESOURCE).cloned().unwrap_or_default();

    let exports = ResourceKind::parse(&kind)
        .map(|kind| kind.exports(&outputs, &parameters))
        .unwrap_or_default();

    Resource {
        name: short_name(rack, &stack.name).to_string(),
        stack: stack.name.clone(),
        status: humanize(&stack.status).to_string(),
        status_reason: stack.status_reason.clone(),
        kind,
        apps: vec![],
        exports,
        outputs,
        parameters,
        tags,
    }
}

pub(crate) fn app_from_stack(rack: &str, stack: &StackDescription) -> App {
    let tags = tag_map(stack);
    let parameters = pairs(&stack.parameters);

    App {
        name: tags
            .get(tags::NAME)
            .cloned()
            .unwrap_or_else(|| short_name(rack, &stack.name).to_string()),
        release: parameters.get("Release").cloned().unwrap_or_default(),
        status: humanize(&stack.status).to_string(),
        outputs: pairs(&stack.outputs),
        parameters,
        tags,
    }
}

impl Provider {
    async fn describe(&self, name: Option<&str>) -> Result<Vec<StackDescription>> {
        debug!("Describing {}", name.unwrap_or("all stacks"));

        self.client
            .describe_stacks(name)
            .await
            .map_err(|e| match e {
                ClientError::NotFound(stack) => Error::NotFound(stack),
                ClientError::Failed(message) => Error::Substrate(message),
            })
    }

    /// Get a resource with the apps linked to it
    pub async fn resource_get(&self, name: &str) -> Result<Resource> {
        let rack = &self.config.rack;
        let stack = Stack::new(rack, name);

        // A missing resource is reported before any failure to list the apps
        let found = self.describe(Some(&stack.name)).await.map_err(|e| match e {
            Error::NotFound(_) => Error::NotFound(name.to_string()),
            e => e,
        })?;

        let description = found
            .into_iter()
            .next()
            .filter(|stack| is_managed(&tag_map(stack), rack, RESOURCE_CATEGORIES))
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let stacks = self.describe(None).await?;
        Ok(attach(rack, resource_from_stack(rack, &description), &stacks))
    }

    /// List every resource of the rack in the order CloudFormation returns them
    pub async fn resource_list(&self) -> Result<Resources> {
        let rack = &self.config.rack;
        let stacks = self.describe(None).await?;

        Ok(stacks
            .iter()
            .filter(|stack| is_managed(&tag_map(stack), rack, RESOURCE_CATEGORIES))
            .map(|stack| attach(rack, resource_from_stack(rack, stack), &stacks))
            .collect())
    }
}
