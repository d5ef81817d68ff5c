//! Configuration for the analytics helpers.
//!
//! Maps directly to `analytics.toml`. Every section is optional and falls
//! back to the defaults the helpers use when called without configuration.

use serde::{Deserialize, Serialize};

use crate::addressable::DEFAULT_LIST_NAME;
use crate::naming::DEFAULT_CONNECTOR;

/// Top-level helper configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtilConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Compound-name construction.
    #[serde(default)]
    pub naming: NamingConfig,
    /// Addressable collection settings.
    #[serde(default)]
    pub collections: CollectionConfig,
}

impl UtilConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `UtilError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::UtilError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Settings for [`crate::naming::Affix`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Separator placed between non-empty name parts.
    #[serde(default = "default_connector")]
    pub connector: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            connector: default_connector(),
        }
    }
}

/// Settings for [`crate::addressable::AddressableList`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Name used in lookup errors when a list is built without one.
    #[serde(default = "default_list_name")]
    pub default_name: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            default_name: default_list_name(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_connector() -> String { DEFAULT_CONNECTOR.to_string() }
fn default_list_name() -> String { DEFAULT_LIST_NAME.to_string() }
