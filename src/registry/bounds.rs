//! Inclusive parameter bounds
//!
//! This module provides the Bounds type used by integer and float parameters.
//! Bounds are fixed at definition time and checked on every mutation.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur when constructing bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Invalid bounds: min ({min}) must not exceed max ({max})")]
    InvalidBounds { min: String, max: String },
}

/// The unbounded endpoints for a numeric parameter kind.
///
/// Implemented for `i64` (full signed 64-bit range) and `f64` (infinities).
pub trait BoundLimits: Copy + PartialOrd + Display {
    /// The value representing "no lower bound".
    const LOWER: Self;

    /// The value representing "no upper bound".
    const UPPER: Self;
}

impl BoundLimits for i64 {
    const LOWER: Self = i64::MIN;
    const UPPER: Self = i64::MAX;
}

impl BoundLimits for f64 {
    const LOWER: Self = f64::NEG_INFINITY;
    const UPPER: Self = f64::INFINITY;
}

/// Represents the inclusive bounds constraint on a numeric parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T: BoundLimits> {
    /// Minimum allowed value for the parameter
    pub min: T,

    /// Maximum allowed value for the parameter
    pub max: T,
}

impl<T: BoundLimits> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: T::LOWER,
            max: T::UPPER,
        }
    }
}

impl<T: BoundLimits> Bounds<T> {
    /// Create a new bounds constraint with min and max values
    ///
    /// # Arguments
    ///
    /// * `min` - Minimum allowed value for the parameter
    /// * `max` - Maximum allowed value for the parameter
    ///
    /// # Returns
    ///
    /// A new `Bounds` object if min <= max, or an error otherwise. A NaN
    /// endpoint never satisfies min <= max and is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramreg_rs::registry::bounds::Bounds;
    ///
    /// let bounds = Bounds::new(1i64, 20).unwrap();
    /// assert_eq!(bounds.min, 1);
    /// assert_eq!(bounds.max, 20);
    /// ```
    pub fn new(min: T, max: T) -> Result<Self, BoundsError> {
        if !(min <= max) {
            return Err(BoundsError::InvalidBounds {
                min: min.to_string(),
                max: max.to_string(),
            });
        }

        Ok(Self { min, max })
    }

    /// Create an unbounded constraint covering the kind's full range
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a bounds constraint with only a minimum value
    pub fn min_only(min: T) -> Self {
        Self {
            min,
            max: T::UPPER,
        }
    }

    /// Create a bounds constraint with only a maximum value
    pub fn max_only(max: T) -> Self {
        Self {
            min: T::LOWER,
            max,
        }
    }

    /// Check whether a value satisfies the bounds
    ///
    /// Membership is inclusive on both ends. A NaN value is never a member.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Check whether the bounds cover the kind's full range
    pub fn is_unbounded(&self) -> bool {
        self.min == T::LOWER && self.max == T::UPPER
    }
}

impl<T: BoundLimits + Serialize> Serialize for Bounds<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Bounds", 2)?;

        // Unbounded endpoints serialize as null
        if self.min == T::LOWER {
            state.serialize_field("min", &None::<T>)?;
        } else {
            state.serialize_field("min", &Some(self.min))?;
        }

        if self.max == T::UPPER {
            state.serialize_field("max", &None::<T>)?;
        } else {
            state.serialize_field("max", &Some(self.max))?;
        }

        state.end()
    }
}

impl<'de, T: BoundLimits + Deserialize<'de> + std::default::Default> Deserialize<'de> for Bounds<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BoundsHelper<T> {
            #[serde(default)]
            min: Option<T>,

            #[serde(default)]
            max: Option<T>,
        }

        let helper = BoundsHelper::deserialize(deserializer)?;

        let min = helper.min.unwrap_or(T::LOWER);
        let max = helper.max.unwrap_or(T::UPPER);

        Ok(Bounds { min, max })
    }
}
