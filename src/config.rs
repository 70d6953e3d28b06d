//! Configuration for the library types
//!
//! Every section has sensible defaults, so a configuration file only needs to
//! name the settings it changes:
//!
//! ```yaml
//! path_map:
//!   set_policy: strict
//! stringify:
//!   delimiter: " | "
//! human:
//!   ending: " or"
//! ```

use crate::core::{HumanOptions, PathMapConfig, StringifyOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Combined configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub path_map: PathMapConfig,
    pub stringify: StringifyOptions,
    pub human: HumanOptions,
}

impl Config {
    /// Parse a YAML configuration. An empty document gives the defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }
}
