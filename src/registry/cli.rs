//! Command-line parsing
//!
//! Tokens are interpreted as a flat sequence of `-<name> <value>` pairs,
//! scanned left to right. Exactly one leading `-` is stripped from a flag
//! token; the following token is consumed blindly as the value, so negative
//! numbers work as values. Every failure is collected into the returned
//! [`ParseReport`] and the scan continues — a malformed argument never
//! silently aborts processing of the remaining ones. The reserved name
//! `help` short-circuits the scan instead of being treated as a parameter.

use crate::error::RegistryError;
use crate::registry::registry::ParameterRegistry;
use tracing::{debug, warn};

/// The reserved flag name that requests the help summary
pub const HELP_FLAG: &str = "help";

/// Outcome of one `parse_command_line` call
///
/// Carries every error encountered during the scan plus whether the reserved
/// help flag was seen. Assignments that succeeded before or after a failed
/// flag remain in effect; whether to print the help summary and skip normal
/// execution is the host's decision.
#[derive(Debug, Default)]
pub struct ParseReport {
    help_requested: bool,
    errors: Vec<RegistryError>,
}

impl ParseReport {
    /// Check whether the scan completed without a single error
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check whether the reserved help flag was seen
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// Errors in the order they were encountered
    pub fn errors(&self) -> &[RegistryError] {
        &self.errors
    }

    /// Consume the report, yielding the collected errors
    pub fn into_errors(self) -> Vec<RegistryError> {
        self.errors
    }
}

impl ParameterRegistry {
    /// Populate parameters from command-line tokens
    ///
    /// Accepts any iterator of string-like tokens, e.g.
    /// `std::env::args().skip(1)` or a slice of string literals. Repeated
    /// assignment to the same name is last-write-wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramreg_rs::ParameterRegistry;
    ///
    /// let mut registry = ParameterRegistry::new();
    /// registry.define_category("algorithm", "").unwrap();
    /// registry
    ///     .define_integer_parameter("depth", "Maximum tree depth", 4, "algorithm", 1, 20)
    ///     .unwrap();
    ///
    /// let report = registry.parse_command_line(["-depth", "5", "-depth", "9"]);
    /// assert!(report.is_clean());
    /// assert_eq!(registry.get_integer_parameter("depth").unwrap(), 9);
    /// ```
    pub fn parse_command_line<I>(&mut self, tokens: I) -> ParseReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut report = ParseReport::default();
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            let token = token.as_ref();

            let Some(name) = token.strip_prefix('-') else {
                report.errors.push(RegistryError::NotAFlag(token.to_string()));
                continue;
            };

            if name == HELP_FLAG {
                debug!("help requested, scan stopped");
                report.help_requested = true;
                break;
            }

            let Some(value) = tokens.next() else {
                report
                    .errors
                    .push(RegistryError::MissingValue(name.to_string()));
                break;
            };
            let value = value.as_ref();

            match self.assign_from_text(name, value) {
                Ok(()) => debug!(parameter = name, value, "assigned from command line"),
                Err(err) => {
                    warn!(parameter = name, value, %err, "rejected command-line value");
                    report.errors.push(err);
                }
            }
        }

        report
    }

    fn assign_from_text(&mut self, name: &str, value: &str) -> crate::error::Result<()> {
        self.param_mut(name)?.set_from_text(value)
    }
}
