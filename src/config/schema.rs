//! Settings schema definitions.
//!
//! These structs map to the YAML settings file passed with `--config` or
//! discovered as `.meshlint.yml` in the working directory.

use serde::{Deserialize, Serialize};

use crate::msg::Level;

/// Analysis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Namespace given to namespaced resources that declare none.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Messages below this level are not shown.
    pub output_threshold: Level,

    /// Messages at or above this level fail the run.
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: Level,

    /// Message suppression rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppress: Vec<SuppressionRule>,

    /// Analyzers that never run, by name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_analyzers: Vec<String>,

    /// Run analyzers in parallel.
    #[serde(default, skip_serializing_if = "is_false")]
    pub parallel: bool,

    /// Cluster id stamped on every loaded resource.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            output_threshold: Level::Info,
            failure_threshold: default_failure_threshold(),
            suppress: Vec::new(),
            disabled_analyzers: Vec::new(),
            parallel: false,
            cluster: String::new(),
        }
    }
}

/// Suppress messages with `code` on resources whose friendly name matches
/// `resource` (`*` matches anything).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionRule {
    pub code: String,
    pub resource: String,
}

fn default_namespace() -> String {
    "default".to_string()
}

fn default_failure_threshold() -> Level {
    Level::Error
}

fn is_false(b: &bool) -> bool {
    !*b
}
