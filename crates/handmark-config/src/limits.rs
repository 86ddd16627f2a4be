//! Input limits.

use serde::{Deserialize, Serialize};

use handmark_core::{HandmarkError, Result};

/// Default maximum input size: 16 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Limits applied before a document is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LimitsConfig {
    /// Largest accepted source document in bytes. 0 disables the check.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl LimitsConfig {
    /// Merge another LimitsConfig into this one.
    pub fn merge(&mut self, other: &LimitsConfig) {
        self.max_input_bytes = other.max_input_bytes;
    }

    /// Reject `source` when it exceeds the configured size.
    ///
    /// ```
    /// use handmark_config::LimitsConfig;
    /// let limits = LimitsConfig { max_input_bytes: 4 };
    /// assert!(limits.check("# ok").is_ok());
    /// assert!(limits.check("# too long").is_err());
    /// ```
    pub fn check(&self, source: &str) -> Result<()> {
        if self.max_input_bytes != 0 && source.len() > self.max_input_bytes {
            return Err(HandmarkError::ResourceExhaustion {
                size: source.len(),
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}
