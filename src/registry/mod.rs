//! # Parameter Registry
//!
//! This module provides a typed, self-describing parameter registry: named,
//! validated configuration options grouped into categories, populated from
//! command-line arguments, and reported to caller-supplied sinks.
//!
//! ## Key Features
//!
//! - **Typed Parameters**: string, integer, boolean, and float parameters in
//!   one flat namespace, each with a default and a constraint fixed at
//!   definition time
//! - **Validation Everywhere**: definitions reject invalid defaults,
//!   mutations reject out-of-bounds and non-allow-listed values without
//!   partial state changes
//! - **Command-Line Parsing**: `-name value` pairs with per-flag error
//!   batching and a reserved `help` flag
//! - **Deterministic Reporting**: values, differences from defaults, and a
//!   help summary, grouped by category in registration order
//!
//! ## Core Components
//!
//! - [`ParameterRegistry`]: the collection with define, set, get, parse, and
//!   report operations
//! - [`Parameter`] and [`ParameterValue`]: individual parameters and their
//!   typed payloads
//! - [`Bounds`]: inclusive min/max constraints for numeric kinds
//! - [`Category`]: ordered grouping used only by the reports
//! - [`ParseReport`]: the batched outcome of one command-line scan
//!
//! ## Example Usage
//!
//! ```rust
//! use paramreg_rs::ParameterRegistry;
//!
//! let mut registry = ParameterRegistry::new();
//! registry.define_category("algorithm", "Core search settings").unwrap();
//! registry
//!     .define_integer_parameter("depth", "Maximum tree depth", 4, "algorithm", 1, 20)
//!     .unwrap();
//! registry
//!     .define_string_parameter(
//!         "objective",
//!         "Optimization objective",
//!         "accuracy",
//!         "algorithm",
//!         &["accuracy", "f1-score"],
//!     )
//!     .unwrap();
//!
//! // Populate from the command line; failures are batched, not fatal.
//! let report = registry.parse_command_line(["-depth", "6", "-objective", "f1-score"]);
//! assert!(report.is_clean());
//!
//! assert_eq!(registry.get_integer_parameter("depth").unwrap(), 6);
//! assert_eq!(registry.get_string_parameter("objective").unwrap(), "f1-score");
//!
//! // Report effective values to any std::io::Write sink.
//! let mut out = Vec::new();
//! registry.write_parameter_values(&mut out).unwrap();
//! ```

pub mod bounds;
pub mod category;
pub mod cli;
pub mod parameter;
pub mod registry;

mod report;


// Re-export key types
pub use bounds::{BoundLimits, Bounds, BoundsError};
pub use category::Category;
pub use cli::{ParseReport, HELP_FLAG};
pub use parameter::{Parameter, ParameterKind, ParameterValue};
pub use registry::ParameterRegistry;
