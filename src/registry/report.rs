//! Reporting operations
//!
//! The three reports traverse categories in registration order and
//! parameters in registration order within each category, writing plain text
//! to a caller-supplied sink, one parameter per line under a category header
//! line. They are pure reads: given the same registry state they produce the
//! same bytes.

use crate::error::Result;
use crate::registry::registry::ParameterRegistry;
use std::io::{self, Write};

impl ParameterRegistry {
    /// Write every parameter's current value, grouped by category
    pub fn write_parameter_values<W: Write>(&self, out: &mut W) -> Result<()> {
        for category in &self.categories {
            writeln!(out, "[{}]", category.name())?;
            for name in category.members() {
                if let Some(param) = self.params.get(name) {
                    writeln!(out, "    {} = {}", param.name(), param.current_to_string())?;
                }
            }
        }
        Ok(())
    }

    /// Write the parameters whose current value differs from the default
    ///
    /// Equality is kind-exact (see [`Parameter::is_default`]); a category
    /// with no differing members is omitted entirely, so a registry with no
    /// mutations produces empty output.
    ///
    /// [`Parameter::is_default`]: crate::registry::parameter::Parameter::is_default
    pub fn write_parameters_different_from_default<W: Write>(&self, out: &mut W) -> Result<()> {
        for category in &self.categories {
            let changed: Vec<_> = category
                .members()
                .iter()
                .filter_map(|name| self.params.get(name))
                .filter(|param| !param.is_default())
                .collect();

            if changed.is_empty() {
                continue;
            }

            writeln!(out, "[{}]", category.name())?;
            for param in changed {
                writeln!(
                    out,
                    "    {} = {} (default: {})",
                    param.name(),
                    param.current_to_string(),
                    param.default_to_string()
                )?;
            }
        }
        Ok(())
    }

    /// Write the help summary: per category, each parameter's name, kind,
    /// default, constraints, and description
    pub fn write_help_summary<W: Write>(&self, out: &mut W) -> Result<()> {
        for category in &self.categories {
            if category.description().is_empty() {
                writeln!(out, "[{}]", category.name())?;
            } else {
                writeln!(out, "[{}] {}", category.name(), category.description())?;
            }

            for name in category.members() {
                let Some(param) = self.params.get(name) else {
                    continue;
                };

                match param.constraint_summary() {
                    Some(constraint) => writeln!(
                        out,
                        "    {}: {} (default: {}, {})",
                        param.name(),
                        param.kind(),
                        param.default_to_string(),
                        constraint
                    )?,
                    None => writeln!(
                        out,
                        "    {}: {} (default: {})",
                        param.name(),
                        param.kind(),
                        param.default_to_string()
                    )?,
                }

                if !param.description().is_empty() {
                    writeln!(out, "        {}", param.description())?;
                }
            }
        }
        Ok(())
    }

    /// Print every parameter's current value to standard output
    pub fn print_parameter_values(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_parameter_values(&mut stdout.lock())
    }

    /// Print the parameters that differ from their defaults to standard output
    pub fn print_parameters_different_from_default(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_parameters_different_from_default(&mut stdout.lock())
    }

    /// Print the help summary to standard output
    pub fn print_help_summary(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_help_summary(&mut stdout.lock())
    }
}
