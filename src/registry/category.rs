//! Category records for grouped reporting
//!
//! Categories organize parameters for help and value reports only; lookup
//! and validation never go through them. A category stores an ordered list
//! of member parameter names, which are keys into the registry's parameter
//! map, never owning references.

use serde::{Deserialize, Serialize};

/// A named grouping of parameters used for organized reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    name: String,
    description: String,
    members: Vec<String>,
}

impl Category {
    pub(crate) fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            members: Vec::new(),
        }
    }

    /// Get the name of the category
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the short description of the category
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Member parameter names in registration order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub(crate) fn push_member(&mut self, parameter_name: &str) {
        self.members.push(parameter_name.to_string());
    }
}
