//! Response Context
//!
//! A gateway-style key/value store standing in for the policy context
//! an API proxy hands to its response policies. Writes preserve order,
//! so the header-before-body contract is observable.

/// Context variable for the response content-type header
pub const CONTENT_TYPE_VAR: &str = "response.header.content-type";

/// Context variable for the serialized response body
pub const RESPONSE_CONTENT_VAR: &str = "response.content";

/// Ordered key/value store for response variables
///
/// Setting an existing variable overwrites its value in place; new
/// variables are appended, so iteration order is first-write order.
#[derive(Debug, Clone, Default)]
pub struct ResponseContext {
    variables: Vec<(String, String)>,
}

impl ResponseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a context variable, overwriting any previous value
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.variables.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.variables.push((name, value)),
        }
    }

    /// Get a context variable by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Variable names in first-write order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
