//! A configuration setting: one name paired with one [`Value`].

use std::fmt;

use crate::domain::value::Value;

/// A configuration setting with a name and value.
///
/// The name is fixed at construction.  The value can be replaced in place
/// through [`Setting::set_value`] without changing the setting's position in
/// its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    name: String,
    value: Value,
}

impl Setting {
    /// Creates a setting whose value is present and holds `payload`.
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Value::new(payload),
        }
    }

    /// Name of the setting.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the setting.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable access to the value of the setting.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Replaces the payload of the setting's value.
    pub fn set_value(&mut self, payload: impl Into<String>) {
        self.value.set(payload);
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\":\"{}\"", self.name, self.value)
    }
}
