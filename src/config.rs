//! View configuration.
//!
//! Bounds that keep every code view lookup finite. Front-ends usually keep
//! them in their settings file; missing fields fall back to the defaults.
//!
//! ```
//! use nese_debug::CodeViewConfig;
//!
//! let config = CodeViewConfig::from_json(r#"{ "max_rows": 256 }"#).unwrap();
//! assert_eq!(config.max_rows, 256);
//! assert_eq!(config.max_scan_distance, 4096);
//! ```

use serde::{Deserialize, Serialize};

use crate::debugger::Address;
use crate::error::ConfigError;

/// Default number of rows in the code view table.
pub const DEFAULT_MAX_ROWS: usize = 1024;

/// Default number of bytes a single row lookup may decode forward.
pub const DEFAULT_MAX_SCAN_DISTANCE: Address = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodeViewConfig {
    /// Fixed row count of the code view; rows at or past it never resolve.
    pub max_rows: usize,

    /// Furthest a lookup will decode forward from the closest resolved row
    /// before giving up and rebasing.
    pub max_scan_distance: Address,
}

impl Default for CodeViewConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_scan_distance: DEFAULT_MAX_SCAN_DISTANCE,
        }
    }
}

impl CodeViewConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects bounds that would make the code view unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 {
            return Err(ConfigError::InvalidBound { field: "max_rows" });
        }
        if self.max_scan_distance == 0 {
            return Err(ConfigError::InvalidBound {
                field: "max_scan_distance",
            });
        }
        Ok(())
    }
}
