//! # paramreg-rs
//!
//! `paramreg-rs` is a typed, self-describing parameter registry for host
//! programs such as optimization solvers: declare named, typed, validated
//! options grouped into categories, populate them from command-line
//! arguments, and report effective values.
//!
//! The library provides:
//! - Four parameter kinds (string, integer, boolean, float) in one flat
//!   namespace, each with a default and a constraint fixed at definition time
//! - Allow-lists for strings and inclusive min/max bounds for numeric kinds,
//!   enforced on every mutation path
//! - Command-line parsing of `-name value` pairs with batched per-flag error
//!   reporting and a reserved `help` flag
//! - Deterministic reports (current values, differences from defaults, help
//!   summary) grouped by category in registration order
//! - An optional binary feature-vector payload for handing pre-parsed data
//!   to the host algorithm (`data` feature, enabled by default)
//!
//! ## Basic Usage
//!
//! ```
//! use paramreg_rs::ParameterRegistry;
//!
//! let mut registry = ParameterRegistry::new();
//! registry.define_category("algorithm", "Core search settings").unwrap();
//! registry
//!     .define_integer_parameter("depth", "Maximum tree depth", 4, "algorithm", 1, 20)
//!     .unwrap();
//!
//! let report = registry.parse_command_line(["-depth", "6"]);
//! assert!(report.is_clean());
//! assert_eq!(registry.get_integer_parameter("depth").unwrap(), 6);
//! ```

// Public modules
pub mod error;

// Registry component
pub mod registry;

// Conditional modules
#[cfg(feature = "data")]
pub mod data;

// Re-exports for convenience
pub use error::{RegistryError, Result};

pub use registry::{
    Bounds, Category, Parameter, ParameterKind, ParameterRegistry, ParameterValue, ParseReport,
    HELP_FLAG,
};

#[cfg(feature = "data")]
pub use data::FeatureVectorBinary;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
