//! Parameter definition and implementation
//!
//! This module provides the Parameter struct, the fundamental building block
//! of the registry. A parameter carries a typed payload with its default,
//! its current value, and the constraint fixed at definition time. All
//! mutation paths (typed setters and command-line text) funnel through the
//! same validation.

use crate::error::{RegistryError, Result};
use crate::registry::bounds::Bounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four parameter kinds supported by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    String,
    Integer,
    Boolean,
    Float,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParameterKind::String => "string",
            ParameterKind::Integer => "integer",
            ParameterKind::Boolean => "boolean",
            ParameterKind::Float => "float",
        };
        write!(f, "{}", text)
    }
}

/// Typed payload of a parameter: default value, current value, and the
/// constraint data for the kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParameterValue {
    /// A string parameter; an empty allow-list means any value is accepted
    String {
        default: String,
        current: String,
        allowed: Vec<String>,
    },

    /// A signed 64-bit integer parameter with inclusive bounds
    Integer {
        default: i64,
        current: i64,
        bounds: Bounds<i64>,
    },

    /// A boolean parameter (no constraint data)
    Boolean { default: bool, current: bool },

    /// A double-precision float parameter with inclusive bounds
    Float {
        default: f64,
        current: f64,
        bounds: Bounds<f64>,
    },
}

/// A named, typed, validated configurable value with a default
///
/// Parameters are created through the registry's `define_*` operations and
/// are never deleted. The constraint (allow-list or bounds) is fixed at
/// definition time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Name of the parameter
    pub name: String,

    /// Short description shown in the help summary
    description: String,

    /// Name of the owning category
    category: String,

    /// Typed payload
    value: ParameterValue,
}

impl Parameter {
    /// Create a new string parameter
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the parameter
    /// * `description` - Short description shown in the help summary
    /// * `category` - Name of the owning category
    /// * `default` - Default value; also the initial current value
    /// * `allowed_values` - Permitted values; empty means unrestricted
    ///
    /// # Returns
    ///
    /// A new parameter, or an `InvalidDefault` error if the default is not a
    /// member of a non-empty allow-list.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramreg_rs::registry::parameter::Parameter;
    ///
    /// let param = Parameter::new_string(
    ///     "objective",
    ///     "Optimization objective",
    ///     "algorithm",
    ///     "accuracy",
    ///     &["accuracy", "f1-score"],
    /// )
    /// .unwrap();
    /// assert_eq!(param.name(), "objective");
    /// assert_eq!(param.as_string(), Some("accuracy"));
    /// ```
    pub fn new_string(
        name: &str,
        description: &str,
        category: &str,
        default: &str,
        allowed_values: &[&str],
    ) -> Result<Self> {
        let allowed: Vec<String> = allowed_values.iter().map(|v| v.to_string()).collect();

        if !allowed.is_empty() && !allowed.iter().any(|a| a == default) {
            return Err(RegistryError::InvalidDefault {
                name: name.to_string(),
                reason: format!("'{}' is not in the allow-list {:?}", default, allowed),
            });
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            value: ParameterValue::String {
                default: default.to_string(),
                current: default.to_string(),
                allowed,
            },
        })
    }

    /// Create a new integer parameter with inclusive bounds
    ///
    /// Pass `i64::MIN` and `i64::MAX` for an unconstrained parameter.
    ///
    /// # Returns
    ///
    /// A new parameter, or an error if `min > max` or the default falls
    /// outside the bounds.
    pub fn new_integer(
        name: &str,
        description: &str,
        category: &str,
        default: i64,
        min: i64,
        max: i64,
    ) -> Result<Self> {
        let bounds = Bounds::new(min, max).map_err(|_| RegistryError::InvalidBounds {
            name: name.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        })?;

        if !bounds.contains(default) {
            return Err(RegistryError::InvalidDefault {
                name: name.to_string(),
                reason: format!("{} is outside bounds [{}, {}]", default, min, max),
            });
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            value: ParameterValue::Integer {
                default,
                current: default,
                bounds,
            },
        })
    }

    /// Create a new boolean parameter
    pub fn new_boolean(name: &str, description: &str, category: &str, default: bool) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            value: ParameterValue::Boolean {
                default,
                current: default,
            },
        }
    }

    /// Create a new float parameter with inclusive bounds
    ///
    /// Pass `f64::NEG_INFINITY` and `f64::INFINITY` for an unconstrained
    /// parameter. A NaN default or endpoint is rejected.
    pub fn new_float(
        name: &str,
        description: &str,
        category: &str,
        default: f64,
        min: f64,
        max: f64,
    ) -> Result<Self> {
        let bounds = Bounds::new(min, max).map_err(|_| RegistryError::InvalidBounds {
            name: name.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        })?;

        if !bounds.contains(default) {
            return Err(RegistryError::InvalidDefault {
                name: name.to_string(),
                reason: format!("{} is outside bounds [{}, {}]", default, min, max),
            });
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            value: ParameterValue::Float {
                default,
                current: default,
                bounds,
            },
        })
    }

    /// Get the name of the parameter
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the short description of the parameter
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the name of the owning category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the kind of the parameter
    pub fn kind(&self) -> ParameterKind {
        match self.value {
            ParameterValue::String { .. } => ParameterKind::String,
            ParameterValue::Integer { .. } => ParameterKind::Integer,
            ParameterValue::Boolean { .. } => ParameterKind::Boolean,
            ParameterValue::Float { .. } => ParameterKind::Float,
        }
    }

    /// Get the typed payload of the parameter
    pub fn value(&self) -> &ParameterValue {
        &self.value
    }

    /// Current value if this is a string parameter
    pub fn as_string(&self) -> Option<&str> {
        match &self.value {
            ParameterValue::String { current, .. } => Some(current),
            _ => None,
        }
    }

    /// Current value if this is an integer parameter
    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            ParameterValue::Integer { current, .. } => Some(current),
            _ => None,
        }
    }

    /// Current value if this is a boolean parameter
    pub fn as_boolean(&self) -> Option<bool> {
        match self.value {
            ParameterValue::Boolean { current, .. } => Some(current),
            _ => None,
        }
    }

    /// Current value if this is a float parameter
    pub fn as_float(&self) -> Option<f64> {
        match self.value {
            ParameterValue::Float { current, .. } => Some(current),
            _ => None,
        }
    }

    /// Set the value of a string parameter
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value was set, a `ValueNotAllowed` error if the value
    /// is not a member of a non-empty allow-list, or a `KindMismatch` error
    /// if this is not a string parameter. The current value is unchanged on
    /// error.
    pub fn set_string(&mut self, new_value: &str) -> Result<()> {
        match &mut self.value {
            ParameterValue::String {
                current, allowed, ..
            } => {
                if !allowed.is_empty() && !allowed.iter().any(|a| a == new_value) {
                    return Err(RegistryError::ValueNotAllowed {
                        name: self.name.clone(),
                        value: new_value.to_string(),
                        allowed: allowed.clone(),
                    });
                }
                *current = new_value.to_string();
                Ok(())
            }
            _ => Err(self.mismatch(ParameterKind::String)),
        }
    }

    /// Set the value of an integer parameter
    ///
    /// Fails with `OutOfBounds` if the value falls outside the inclusive
    /// bounds, leaving the current value unchanged.
    pub fn set_integer(&mut self, new_value: i64) -> Result<()> {
        match &mut self.value {
            ParameterValue::Integer {
                current, bounds, ..
            } => {
                if !bounds.contains(new_value) {
                    return Err(RegistryError::OutOfBounds {
                        name: self.name.clone(),
                        value: new_value.to_string(),
                        min: bounds.min.to_string(),
                        max: bounds.max.to_string(),
                    });
                }
                *current = new_value;
                Ok(())
            }
            _ => Err(self.mismatch(ParameterKind::Integer)),
        }
    }

    /// Set the value of a boolean parameter
    pub fn set_boolean(&mut self, new_value: bool) -> Result<()> {
        match &mut self.value {
            ParameterValue::Boolean { current, .. } => {
                *current = new_value;
                Ok(())
            }
            _ => Err(self.mismatch(ParameterKind::Boolean)),
        }
    }

    /// Set the value of a float parameter
    ///
    /// Fails with `OutOfBounds` if the value falls outside the inclusive
    /// bounds (NaN never satisfies them), leaving the current value
    /// unchanged.
    pub fn set_float(&mut self, new_value: f64) -> Result<()> {
        match &mut self.value {
            ParameterValue::Float {
                current, bounds, ..
            } => {
                if !bounds.contains(new_value) {
                    return Err(RegistryError::OutOfBounds {
                        name: self.name.clone(),
                        value: new_value.to_string(),
                        min: bounds.min.to_string(),
                        max: bounds.max.to_string(),
                    });
                }
                *current = new_value;
                Ok(())
            }
            _ => Err(self.mismatch(ParameterKind::Float)),
        }
    }

    /// Set the value from command-line text
    ///
    /// Converts the text according to the parameter's kind and dispatches to
    /// the matching typed setter. Integers and floats are parsed with format
    /// and overflow checking; non-finite float text is rejected; booleans
    /// accept exactly `true`, `false`, `1`, or `0`.
    pub fn set_from_text(&mut self, text: &str) -> Result<()> {
        match self.kind() {
            ParameterKind::String => self.set_string(text),
            ParameterKind::Integer => {
                let value: i64 = text.parse().map_err(|_| self.malformed(text))?;
                self.set_integer(value)
            }
            ParameterKind::Boolean => {
                let value = boolean_from_text(text).ok_or_else(|| self.malformed(text))?;
                self.set_boolean(value)
            }
            ParameterKind::Float => {
                let value: f64 = text.parse().map_err(|_| self.malformed(text))?;
                if !value.is_finite() {
                    return Err(self.malformed(text));
                }
                self.set_float(value)
            }
        }
    }

    /// Reset the current value to the default
    pub fn reset(&mut self) {
        match &mut self.value {
            ParameterValue::String {
                default, current, ..
            } => *current = default.clone(),
            ParameterValue::Integer {
                default, current, ..
            } => *current = *default,
            ParameterValue::Boolean { default, current } => *current = *default,
            ParameterValue::Float {
                default, current, ..
            } => *current = *default,
        }
    }

    /// Check whether the current value equals the default
    ///
    /// Equality is kind-exact: strings, integers, and booleans compare with
    /// `==`, and floats compare bit-for-bit (no tolerance), which keeps the
    /// difference report deterministic. NaN can never be stored, so the
    /// float comparison is total.
    pub fn is_default(&self) -> bool {
        match &self.value {
            ParameterValue::String {
                default, current, ..
            } => default == current,
            ParameterValue::Integer {
                default, current, ..
            } => default == current,
            ParameterValue::Boolean { default, current } => default == current,
            ParameterValue::Float {
                default, current, ..
            } => default == current,
        }
    }

    /// Render the current value as display text
    pub fn current_to_string(&self) -> String {
        match &self.value {
            ParameterValue::String { current, .. } => current.clone(),
            ParameterValue::Integer { current, .. } => current.to_string(),
            ParameterValue::Boolean { current, .. } => current.to_string(),
            ParameterValue::Float { current, .. } => current.to_string(),
        }
    }

    /// Render the default value as display text
    pub fn default_to_string(&self) -> String {
        match &self.value {
            ParameterValue::String { default, .. } => default.clone(),
            ParameterValue::Integer { default, .. } => default.to_string(),
            ParameterValue::Boolean { default, .. } => default.to_string(),
            ParameterValue::Float { default, .. } => default.to_string(),
        }
    }

    /// Render the constraint for the help summary, if any
    ///
    /// Returns `None` for booleans, unrestricted strings, and unbounded
    /// numeric parameters.
    pub fn constraint_summary(&self) -> Option<String> {
        match &self.value {
            ParameterValue::String { allowed, .. } if !allowed.is_empty() => {
                Some(format!("allowed: {}", allowed.join(", ")))
            }
            ParameterValue::Integer { bounds, .. } if !bounds.is_unbounded() => {
                Some(format!("range [{}, {}]", bounds.min, bounds.max))
            }
            ParameterValue::Float { bounds, .. } if !bounds.is_unbounded() => {
                Some(format!("range [{}, {}]", bounds.min, bounds.max))
            }
            _ => None,
        }
    }

    pub(crate) fn mismatch(&self, requested: ParameterKind) -> RegistryError {
        RegistryError::KindMismatch {
            name: self.name.clone(),
            requested,
            actual: self.kind(),
        }
    }

    fn malformed(&self, text: &str) -> RegistryError {
        RegistryError::MalformedValue {
            name: self.name.clone(),
            value: text.to_string(),
            kind: self.kind(),
        }
    }
}

/// The boolean vocabulary accepted on the command line
fn boolean_from_text(text: &str) -> Option<bool> {
    match text {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
