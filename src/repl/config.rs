//! Read loop configuration.

use serde::{Deserialize, Serialize};

/// Digits printed after the decimal point unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 6;

/// Settings for a [`Repl`](crate::repl::Repl) session.
///
/// # Example
///
/// ```rust
/// use reckon::repl::ReplConfig;
///
/// let config = ReplConfig::default().precision(2).banner(false);
/// assert_eq!(config.precision, 2);
/// assert!(!config.banner);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Fractional digits in each result line
    pub precision: usize,
    /// Whether to write the usage banner before reading input
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            banner: true,
        }
    }
}

impl ReplConfig {
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = digits;
        self
    }

    pub fn banner(mut self, enabled: bool) -> Self {
        self.banner = enabled;
        self
    }
}
