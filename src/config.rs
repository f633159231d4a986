//! Field-name configuration shared by all transformations.
//!
//! A `TreeConfig` names the three fields the transformations care about:
//! the id field, the parent-id field, and the children field. Defaults are
//! `"id"` / `"pid"` / `"children"`. The same config must be supplied to
//! both directions of a round trip.

use serde::{Deserialize, Serialize};

use crate::errors::{TreeError, TreeResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Field holding a record's unique identifier
    pub id_field: String,
    /// Field holding a record's parent identifier
    pub pid_field: String,
    /// Field holding a record's ordered child sequence
    pub children_field: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            id_field: "id".to_string(),
            pid_field: "pid".to_string(),
            children_field: "children".to_string(),
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_field(mut self, name: impl Into<String>) -> Self {
        self.id_field = name.into();
        self
    }

    pub fn with_pid_field(mut self, name: impl Into<String>) -> Self {
        self.pid_field = name.into();
        self
    }

    pub fn with_children_field(mut self, name: impl Into<String>) -> Self {
        self.children_field = name.into();
        self
    }

    /// Reject empty or colliding field names before any output is produced.
    pub(crate) fn validate(&self) -> TreeResult<()> {
        for (name, value) in [
            ("id_field", &self.id_field),
            ("pid_field", &self.pid_field),
            ("children_field", &self.children_field),
        ] {
            if value.is_empty() {
                return Err(TreeError::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        if self.id_field == self.pid_field
            || self.id_field == self.children_field
            || self.pid_field == self.children_field
        {
            return Err(TreeError::InvalidConfig(format!(
                "field names must be distinct: id={:?}, pid={:?}, children={:?}",
                self.id_field, self.pid_field, self.children_field
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_validating_then_passes() {
        assert!(TreeConfig::default().validate().is_ok());
    }

    #[test]
    fn given_colliding_fields_when_validating_then_errors() {
        let config = TreeConfig::new().with_pid_field("id");
        assert!(matches!(
            config.validate(),
            Err(TreeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn given_empty_field_when_validating_then_errors() {
        let config = TreeConfig::new().with_children_field("");
        assert!(matches!(
            config.validate(),
            Err(TreeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn given_custom_fields_when_validating_then_passes() {
        let config = TreeConfig::new()
            .with_id_field("key")
            .with_pid_field("parent_key")
            .with_children_field("nodes");
        assert!(config.validate().is_ok());
    }
}
