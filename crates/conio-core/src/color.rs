//! Color mode selection.
//!
//! A [`ColorMode`] is the user's override on top of the capability probe.
//! `Auto` respects the `NO_COLOR` environment variable and then asks the
//! probe. See https://no-color.org/ for the NO_COLOR standard.

use serde::{Deserialize, Serialize};

use crate::capability::CapabilityProbe;

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Always use colors, even when output is not a TTY.
    Always,
    /// Never use colors.
    Never,
    /// Detect from `NO_COLOR` and the stream's terminal capabilities.
    #[default]
    Auto,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(format!(
                "Unknown color mode: '{}'. Use 'always', 'never', or 'auto'.",
                s
            )),
        }
    }
}

impl ColorMode {
    /// Decide whether a stream gets colors under this mode.
    ///
    /// Rules for `Auto`:
    /// 1. If `NO_COLOR` is set (any value), disable colors
    /// 2. Otherwise use the capability probe for the stream
    pub fn resolve(&self, probe: &CapabilityProbe, tty: Option<bool>) -> bool {
        let enabled = match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                probe.environment().var("NO_COLOR").is_none() && probe.supports_color(tty)
            }
        };

        tracing::debug!(mode = %self, ?tty, enabled, "resolved color support");
        enabled
    }
}
