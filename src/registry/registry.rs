//! Parameter registry implementation
//!
//! This module provides the ParameterRegistry struct, the single hand-off
//! point between a host program and its configuration. It owns one map from
//! name to parameter (all four kinds share the namespace) plus the ordered
//! category list used for reporting. Definition-time failures indicate a bug
//! in the host's setup code and are meant to be propagated as fatal;
//! mutation-time failures are recoverable and leave state untouched.

#[cfg(feature = "data")]
use crate::data::FeatureVectorBinary;
use crate::error::{RegistryError, Result};
use crate::registry::category::Category;
use crate::registry::parameter::{Parameter, ParameterKind};
use std::collections::HashMap;
use tracing::debug;

/// A registry of named, typed, validated parameters grouped into categories
///
/// This struct is the registry described in the crate docs. It is a plain
/// in-memory value: single-threaded, no background activity, no I/O beyond
/// the reporting operations. Hosts that need concurrent access must
/// serialize it externally.
///
/// # Examples
///
/// ```
/// use paramreg_rs::ParameterRegistry;
///
/// let mut registry = ParameterRegistry::new();
/// registry.define_category("algorithm", "Core search settings").unwrap();
/// registry
///     .define_integer_parameter("depth", "Maximum tree depth", 4, "algorithm", 1, 20)
///     .unwrap();
///
/// registry.set_integer_parameter("depth", 6).unwrap();
/// assert_eq!(registry.get_integer_parameter("depth").unwrap(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    /// Map of parameter names to parameters; one flat namespace for all kinds
    pub(crate) params: HashMap<String, Parameter>,

    /// Categories in registration order
    pub(crate) categories: Vec<Category>,

    /// Optional pre-parsed data payload, independent of any named parameter
    #[cfg(feature = "data")]
    data: Vec<Vec<FeatureVectorBinary>>,
}

impl ParameterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new category
    ///
    /// Categories must be defined before any parameter references them.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the category was registered, or a `DuplicateCategory`
    /// error if the name already exists.
    pub fn define_category(&mut self, name: &str, description: &str) -> Result<()> {
        if self.category_index(name).is_some() {
            return Err(RegistryError::DuplicateCategory(name.to_string()));
        }

        self.categories.push(Category::new(name, description));
        Ok(())
    }

    /// Define a new string parameter
    ///
    /// An empty `allowed_values` slice means any value is accepted. The
    /// default must be a member of a non-empty allow-list.
    pub fn define_string_parameter(
        &mut self,
        name: &str,
        description: &str,
        default: &str,
        category: &str,
        allowed_values: &[&str],
    ) -> Result<()> {
        let category_idx = self.prepare_definition(name, category)?;
        let param = Parameter::new_string(name, description, category, default, allowed_values)?;
        self.insert(category_idx, param);
        Ok(())
    }

    /// Define a new integer parameter with inclusive bounds
    ///
    /// Pass `i64::MIN` and `i64::MAX` for an unconstrained parameter. The
    /// default must satisfy the bounds.
    pub fn define_integer_parameter(
        &mut self,
        name: &str,
        description: &str,
        default: i64,
        category: &str,
        min: i64,
        max: i64,
    ) -> Result<()> {
        let category_idx = self.prepare_definition(name, category)?;
        let param = Parameter::new_integer(name, description, category, default, min, max)?;
        self.insert(category_idx, param);
        Ok(())
    }

    /// Define a new boolean parameter
    pub fn define_boolean_parameter(
        &mut self,
        name: &str,
        description: &str,
        default: bool,
        category: &str,
    ) -> Result<()> {
        let category_idx = self.prepare_definition(name, category)?;
        let param = Parameter::new_boolean(name, description, category, default);
        self.insert(category_idx, param);
        Ok(())
    }

    /// Define a new float parameter with inclusive bounds
    ///
    /// Pass `f64::NEG_INFINITY` and `f64::INFINITY` for an unconstrained
    /// parameter. The default must satisfy the bounds.
    pub fn define_float_parameter(
        &mut self,
        name: &str,
        description: &str,
        default: f64,
        category: &str,
        min: f64,
        max: f64,
    ) -> Result<()> {
        let category_idx = self.prepare_definition(name, category)?;
        let param = Parameter::new_float(name, description, category, default, min, max)?;
        self.insert(category_idx, param);
        Ok(())
    }

    /// Set the value of a string parameter
    ///
    /// Fails without mutating if the name is unknown, belongs to another
    /// kind, or the value is not allow-listed.
    pub fn set_string_parameter(&mut self, name: &str, value: &str) -> Result<()> {
        self.param_mut(name)?.set_string(value)
    }

    /// Set the value of an integer parameter
    pub fn set_integer_parameter(&mut self, name: &str, value: i64) -> Result<()> {
        self.param_mut(name)?.set_integer(value)
    }

    /// Set the value of a boolean parameter
    pub fn set_boolean_parameter(&mut self, name: &str, value: bool) -> Result<()> {
        self.param_mut(name)?.set_boolean(value)
    }

    /// Set the value of a float parameter
    pub fn set_float_parameter(&mut self, name: &str, value: f64) -> Result<()> {
        self.param_mut(name)?.set_float(value)
    }

    /// Get the current value of a string parameter
    pub fn get_string_parameter(&self, name: &str) -> Result<&str> {
        let param = self.lookup(name)?;
        param
            .as_string()
            .ok_or_else(|| param.mismatch(ParameterKind::String))
    }

    /// Get the current value of an integer parameter
    pub fn get_integer_parameter(&self, name: &str) -> Result<i64> {
        let param = self.lookup(name)?;
        param
            .as_integer()
            .ok_or_else(|| param.mismatch(ParameterKind::Integer))
    }

    /// Get the current value of a boolean parameter
    pub fn get_boolean_parameter(&self, name: &str) -> Result<bool> {
        let param = self.lookup(name)?;
        param
            .as_boolean()
            .ok_or_else(|| param.mismatch(ParameterKind::Boolean))
    }

    /// Get the current value of a float parameter
    pub fn get_float_parameter(&self, name: &str) -> Result<f64> {
        let param = self.lookup(name)?;
        param
            .as_float()
            .ok_or_else(|| param.mismatch(ParameterKind::Float))
    }

    /// Get a parameter by name
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.get(name)
    }

    /// Get the kind of a parameter, if it is defined
    pub fn kind_of(&self, name: &str) -> Option<ParameterKind> {
        self.params.get(name).map(Parameter::kind)
    }

    /// Check whether a parameter with the given name is defined
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of defined parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check whether no parameters are defined
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names in report order: category registration order, then
    /// parameter registration order within each category
    pub fn names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.members().iter().map(String::as_str))
            .collect()
    }

    /// Categories in registration order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Reset every parameter's current value to its default
    pub fn reset_to_defaults(&mut self) {
        for param in self.params.values_mut() {
            param.reset();
        }
    }

    /// Attach a pre-parsed data payload
    ///
    /// The payload lets the registry double as the hand-off point between a
    /// caller and the host algorithm when data arrives already parsed rather
    /// than from a file. It is unrelated to the named parameters and bypasses
    /// the command line entirely.
    #[cfg(feature = "data")]
    pub fn set_data(&mut self, feature_vectors: Vec<Vec<FeatureVectorBinary>>) {
        self.data = feature_vectors;
    }

    /// The attached data payload; empty unless `set_data` was called
    #[cfg(feature = "data")]
    pub fn data(&self) -> &[Vec<FeatureVectorBinary>] {
        &self.data
    }

    pub(crate) fn param_mut(&mut self, name: &str) -> Result<&mut Parameter> {
        self.params
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownParameter(name.to_string()))
    }

    fn lookup(&self, name: &str) -> Result<&Parameter> {
        self.params
            .get(name)
            .ok_or_else(|| RegistryError::UnknownParameter(name.to_string()))
    }

    fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }

    fn prepare_definition(&self, name: &str, category: &str) -> Result<usize> {
        if self.params.contains_key(name) {
            return Err(RegistryError::DuplicateParameter(name.to_string()));
        }

        self.category_index(category)
            .ok_or_else(|| RegistryError::UnknownCategory(category.to_string()))
    }

    fn insert(&mut self, category_idx: usize, param: Parameter) {
        debug!(
            parameter = param.name(),
            kind = %param.kind(),
            category = param.category(),
            "defined parameter"
        );
        self.categories[category_idx].push_member(param.name());
        self.params.insert(param.name().to_string(), param);
    }
}
