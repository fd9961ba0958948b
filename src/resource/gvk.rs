//! Group/Version/Kind type identifiers.
//!
//! A [`Gvk`] names the type of a configuration resource. Analyzers declare
//! the GVKs they read, and the analysis context is queried by GVK.

use serde::{Serialize, Serializer};
use std::fmt;

/// Identifies a resource type.
///
/// Ordering is lexicographic over (group, version, kind), which gives a
/// deterministic iteration order wherever GVKs key an ordered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gvk {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
}

impl Gvk {
    /// Create a GVK.
    pub const fn new(group: &'static str, version: &'static str, kind: &'static str) -> Self {
        Self {
            group,
            version,
            kind,
        }
    }

    /// The group, with the empty core group spelled `core`.
    pub fn canonical_group(&self) -> &'static str {
        if self.group.is_empty() {
            "core"
        } else {
            self.group
        }
    }

    /// The `apiVersion` string a manifest would carry for this type.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.to_string()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// Convert a discovery type URL (`group/version/Kind`) to a known GVK.
    ///
    /// Returns `None` unless the URL has exactly three parts and names a
    /// type in the builtin schema set.
    pub fn from_type_url(type_url: &str) -> Option<Gvk> {
        let mut parts = type_url.splitn(3, '/');
        let (group, version, kind) = (parts.next()?, parts.next()?, parts.next()?);
        super::Schemas::builtin()
            .iter()
            .find(|s| {
                s.gvk.canonical_group() == group && s.gvk.version == version && s.gvk.kind == kind
            })
            .map(|s| s.gvk)
    }
}

impl fmt::Display for Gvk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.canonical_group(), self.version, self.kind)
    }
}

impl Serialize for Gvk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const POD: Gvk = Gvk::new("", "v1", "Pod");
pub const NAMESPACE: Gvk = Gvk::new("", "v1", "Namespace");
pub const SERVICE: Gvk = Gvk::new("", "v1", "Service");
pub const DEPLOYMENT: Gvk = Gvk::new("apps", "v1", "Deployment");
pub const VIRTUAL_SERVICE: Gvk = Gvk::new("networking.istio.io", "v1alpha3", "VirtualService");
pub const DESTINATION_RULE: Gvk = Gvk::new("networking.istio.io", "v1alpha3", "DestinationRule");
pub const GATEWAY: Gvk = Gvk::new("networking.istio.io", "v1alpha3", "Gateway");
