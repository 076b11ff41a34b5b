use heck::ToUpperCamelCase;

/// Turn a user supplied parameter key into its template form,
/// e.g. `url` into `Url` or `visibility-timeout` into `VisibilityTimeout`
pub fn parameter_name(key: &str) -> String {
    key.to_upper_camel_case()
}
