//! Nesting apps under the resources they use
//!
//! A resource links an app through an output named `<Something>Link` holding
//! the app's log group, `<rack>-<app>-LogGroup-<suffix>`.

use crate::client::StackDescription;
use crate::reader::{app_from_stack, tag_map};
use crate::resource::Resource;
use rack_common::stack::tags::{is_managed, Category};
use std::collections::BTreeSet;

/// App name out of a link output value
fn linked_app<'a>(rack: &str, value: &'a str) -> Option<&'a str> {
    let rest = value.strip_prefix(rack)?.strip_prefix('-')?;
    let end = rest.rfind("-LogGroup")?;

    Some(&rest[..end]).filter(|name| !name.is_empty())
}

/// Names of the apps a resource links to
fn linked_apps<'a>(rack: &str, resource: &'a Resource) -> BTreeSet<&'a str> {
    resource
        .outputs
        .iter()
        .filter(|(key, _)| key.ends_with("Link"))
        .filter_map(|(_, value)| linked_app(rack, value))
        .collect()
}

/// Attach every app the resource links to, in the order of `stacks`
///
/// Stacks that are not apps of the rack are skipped, so the full
/// list of rack stacks can be passed in.
pub fn attach(rack: &str, mut resource: Resource, stacks: &[StackDescription]) -> Resource {
    let apps = {
        let linked = linked_apps(rack, &resource);

        stacks
            .iter()
            .filter(|stack| is_managed(&tag_map(stack), rack, &[Category::App]))
            .map(|stack| app_from_stack(rack, stack))
            .filter(|app| linked.contains(app.name.as_str()))
            .collect()
    };

    resource.apps = apps;
    resource
}
