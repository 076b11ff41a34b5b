//! Tag convention shared by every stack a rack manages
//!
//! Each stack carries `Name`, `Rack`, `System` and `Type` tags. Resource stacks
//! also carry a `Resource` tag with the resource type (e.g. `webhook`).

use std::collections::BTreeMap;

pub const NAME: &str = "Name";
pub const RACK: &str = "Rack";
pub const RESOURCE: &str = "Resource";
pub const SYSTEM: &str = "System";
pub const TYPE: &str = "Type";

/// Value of the `System` tag on every managed stack
pub const SYSTEM_NAME: &str = "convox";

/// What a stack is to the rack, kept in the `Type` tag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    App,
    Resource,
    Service,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::App => "app",
            Category::Resource => "resource",
            Category::Service => "service",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "app" => Some(Category::App),
            "resource" => Some(Category::Resource),
            "service" => Some(Category::Service),
            _ => None,
        }
    }
}

/// Standard tag set for a new stack
#[derive(Clone, Debug)]
pub struct Tags<'a> {
    pub name: &'a str,
    pub rack: &'a str,
    pub resource: Option<&'a str>,
    pub category: Category,
}

impl Tags<'_> {
    /// Tags as key/value pairs ordered by key
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut tags = BTreeMap::from([
            (NAME, self.name),
            (RACK, self.rack),
            (SYSTEM, SYSTEM_NAME),
            (TYPE, self.category.as_str()),
        ]);

        if let Some(resource) = self.resource {
            tags.insert(RESOURCE, resource);
        }

        tags.into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

/// Check that tags mark a stack of this rack with one of the categories
pub fn is_managed(tags: &BTreeMap<String, String>, rack: &str, categories: &[Category]) -> bool {
    let category = tags.get(TYPE).and_then(|value| Category::parse(value));

    tags.get(SYSTEM).is_some_and(|system| system == SYSTEM_NAME)
        && tags.get(RACK).is_some_and(|value| value == rack)
        && category.is_some_and(|category| categories.contains(&category))
}
