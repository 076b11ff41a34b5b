/// A stack owned by a rack
///
/// Every stack the rack creates is named `<rack>-<name>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    pub name: String,
}

impl Stack {
    pub fn new(rack: &str, name: &str) -> Self {
        Stack {
            name: format!("{rack}-{name}"),
        }
    }
}

/// Strip the rack prefix from a stack name
///
/// Stacks created outside of the rack keep their name as is.
pub fn short_name<'a>(rack: &str, stack_name: &'a str) -> &'a str {
    stack_name
        .strip_prefix(rack)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(stack_name)
}
