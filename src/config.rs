// Inspector Configuration
//
// Limits and allow/deny lists. Everything here has a default matching the
// documented behavior; a JSON document can override any subset of fields.

use crate::errors::{InspectorError, Result};
use crate::extractors::base::Limits;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Module prefixes that qualify fallback type labels ("sklearn.StandardScaler").
pub const DEFAULT_KNOWN_PREFIXES: &[&str] = &[
    "pandas", "polars", "numpy", "xarray", "scipy", "sklearn", "torch",
];

/// Interpreter/session bindings that are never user variables.
pub const DEFAULT_ALWAYS_SKIP: &[&str] = &["In", "Out", "get_ipython", "exit", "quit", "open"];

pub const DEFAULT_MAX_VARIABLES: usize = 50;

/// Shared default configuration used by the module-level functions.
pub static DEFAULT_CONFIG: Lazy<InspectorConfig> = Lazy::new(InspectorConfig::default);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Cap for every bounded collection field
    pub max_items: usize,
    /// Cap for variable/column/key names; `null` disables truncation
    pub max_name_length: Option<usize>,
    /// Cap for namespace listings
    pub max_variables: usize,
    /// Module prefixes used to qualify fallback type labels
    pub known_prefixes: Vec<String>,
    /// Binding names excluded from listings
    pub always_skip: Vec<String>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            max_items: Limits::DEFAULT_MAX_ITEMS,
            max_name_length: Some(Limits::DEFAULT_MAX_NAME_LENGTH),
            max_variables: DEFAULT_MAX_VARIABLES,
            known_prefixes: DEFAULT_KNOWN_PREFIXES.iter().map(|s| s.to_string()).collect(),
            always_skip: DEFAULT_ALWAYS_SKIP.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl InspectorConfig {
    /// Parse a (possibly partial) JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(InspectorError::Config)
    }

    pub fn limits(&self) -> Limits {
        Limits::new(self.max_items, self.max_name_length)
    }

    pub fn is_always_skipped(&self, name: &str) -> bool {
        self.always_skip.iter().any(|skip| skip == name)
    }
}

/// How much each listed variable is expanded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detail {
    /// `{name, type, repr}` from a direct capped repr
    #[default]
    Basic,
    /// One-line summary strings
    Schema,
    /// Full inspection records
    Full,
}

impl FromStr for Detail {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basic" => Ok(Detail::Basic),
            "schema" => Ok(Detail::Schema),
            "full" => Ok(Detail::Full),
            other => Err(InspectorError::UnknownDetail(other.to_string())),
        }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Detail::Basic => "basic",
            Detail::Schema => "schema",
            Detail::Full => "full",
        };
        f.write_str(label)
    }
}
