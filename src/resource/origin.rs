//! Origin tracking.
//!
//! An [`Origin`] says where a resource came from in terms a human can act
//! on: a friendly name, the owning namespace, a source [`Reference`] such as
//! a file position, and a map from field paths to source lines so that
//! diagnostics can point at the offending field.

use std::collections::BTreeMap;
use std::fmt;

use super::name::Namespace;

/// Field path (e.g. `spec.http[0].route[1].destination.host`) to 1-based line.
pub type FieldsMap = BTreeMap<String, usize>;

/// Identifier of the cluster a resource was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClusterId(String);

impl ClusterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A locator for a resource's source, rendered into diagnostics.
pub trait Reference: fmt::Display + fmt::Debug + Send + Sync {
    /// Render the locator as if it pointed at `line` instead of its own line.
    fn render_at_line(&self, line: usize) -> String;
}

/// Where a resource came from.
///
/// Implementations back onto different storage tiers (cluster objects,
/// files, synthetic data); all are attached when an instance is built and
/// never change afterwards.
pub trait Origin: fmt::Debug + Send + Sync {
    /// Human-friendly name, e.g. `Pod default/foo`.
    fn friendly_name(&self) -> String;

    /// Stable key for ordering diagnostics by resource.
    fn comparator(&self) -> String;

    /// The namespace that owns the resource.
    fn namespace(&self) -> Namespace;

    /// Source locator, if the backing store has one.
    fn reference(&self) -> Option<&dyn Reference>;

    /// Field path to line mapping. Empty when lines are not tracked.
    fn field_map(&self) -> &FieldsMap;

    /// Cluster the resource was read from.
    fn cluster_name(&self) -> &ClusterId;
}
