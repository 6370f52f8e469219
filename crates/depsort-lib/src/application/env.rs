//! Standard colour variables: `CI`, `FORCE_COLOR`, `NO_COLOR`, `CLICOLOR`
//!
//! These sit between the built-in default and the `--color` flag, so an
//! explicit flag still wins over any of them.

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Colour-related variables read from the process environment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    pub no_color: Option<String>,
    pub force_color: Option<String>,
    pub clicolor: Option<String>,
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Read the variables from the current environment
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    /// The colour choice the environment forces, if any
    ///
    /// `CI` always disables colour. Otherwise a recognised `FORCE_COLOR`
    /// decides, then a non-empty `NO_COLOR`, then `CLICOLOR=0`.
    pub fn color_override(&self) -> Option<ColorIntent> {
        if self.ci.is_some() {
            return Some(ColorIntent::Never);
        }

        let no_color = self.no_color.as_deref().is_some_and(|v| !v.is_empty());
        let clicolor_off = self.clicolor.as_deref() == Some("0");

        self.force_color
            .as_deref()
            .and_then(parse_force_color)
            .or((no_color || clicolor_off).then_some(ColorIntent::Never))
    }

    /// Apply [`Self::color_override`] on top of `color`
    pub fn apply_color_config(&self, color: ColorIntent) -> ColorIntent {
        self.color_override().unwrap_or(color)
    }
}

/// `FORCE_COLOR` values; anything else is ignored
fn parse_force_color(value: &str) -> Option<ColorIntent> {
    match value {
        "0" | "false" => Some(ColorIntent::Never),
        "1" | "2" | "3" | "true" => Some(ColorIntent::Always),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
