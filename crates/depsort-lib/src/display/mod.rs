//! Result rendering
//!
//! Turns resolver answers into the text written to stdout. Text output is
//! one package per line so it pipes cleanly; JSON output is a single
//! pretty-printed document. Rendering returns strings and never writes,
//! which keeps the command handlers the only place that touches stdout.

use crate::application::AppConfig;
use crate::primitives::OutputFormat;
use console::style;
use serde::Serialize;

/// JSON shape for list-valued queries
#[derive(Debug, Serialize)]
struct PackageListReport<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    package: Option<&'a str>,
    packages: &'a [String],
}

/// JSON shape for the max-dependencies query
#[derive(Debug, Serialize)]
struct MaxDependenciesReport<'a> {
    package: Option<&'a str>,
    dependencies: usize,
}

#[derive(Debug, Serialize)]
struct VersionReport<'a> {
    name: &'a str,
    version: &'a str,
}

/// Renders query results in the configured format
#[derive(Debug, Clone, Copy)]
pub struct Display {
    format: OutputFormat,
    color: bool,
}

impl Display {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Build from the resolved config, asking the terminal when colour is `auto`
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.format, config.color.enabled())
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Render a list of packages
    ///
    /// `query` names the command that produced the list and `package` the
    /// package it was asked about, if any. Both only show up in JSON.
    pub fn package_list(
        &self,
        query: &str,
        package: Option<&str>,
        packages: &[String],
    ) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&PackageListReport {
                query,
                package,
                packages,
            }),
            OutputFormat::Text => Ok(packages
                .iter()
                .map(|name| self.package_name(name))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Render the package with the most dependencies and its count
    pub fn max_dependencies(
        &self,
        result: Option<(&str, usize)>,
    ) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&MaxDependenciesReport {
                package: result.map(|(name, _)| name),
                dependencies: result.map_or(0, |(_, count)| count),
            }),
            OutputFormat::Text => Ok(match result {
                Some((name, count)) => format!(
                    "{} ({} {})",
                    self.package_name(name),
                    count,
                    if count == 1 {
                        "dependency"
                    } else {
                        "dependencies"
                    }
                ),
                None => self.subtle("No packages"),
            }),
        }
    }

    /// Render version information
    pub fn version(&self, name: &str, version: &str) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&VersionReport { name, version }),
            OutputFormat::Text => Ok(format!(
                "{} {}",
                style(name).bold().force_styling(self.color),
                version
            )),
        }
    }

    /// Hint shown when no command is given
    pub fn usage_hint(&self) -> String {
        format!(
            "depsort - package installation ordering\n{}",
            self.subtle("Run 'depsort --help' for usage information")
        )
    }

    fn package_name(&self, name: &str) -> String {
        style(name).green().force_styling(self.color).to_string()
    }

    fn subtle(&self, text: &str) -> String {
        style(text).dim().force_styling(self.color).to_string()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
