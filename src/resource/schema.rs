//! Resource schemas.
//!
//! A [`Schema`] describes one resource type: its canonical [`Gvk`], the
//! API versions accepted as aliases for it, and whether it is namespaced.
//! [`Schemas::builtin`] is the fixed set of types meshlint analyzes.

use std::sync::LazyLock;

use serde_yaml::Value;

use super::gvk::{self, Gvk};
use super::spec::Spec;

/// Description of a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Canonical type identifier. Instances are always stored under this GVK.
    pub gvk: Gvk,
    /// Lower-case plural resource name, e.g. `virtualservices`.
    pub plural: &'static str,
    /// Whether resources of this type live outside any namespace.
    pub cluster_scoped: bool,
    /// API versions accepted for this type in manifests.
    pub versions: &'static [&'static str],
}

impl Schema {
    /// Decode a raw `spec` value into this type's payload.
    ///
    /// The payload variant is selected by the schema's GVK alone. A missing
    /// (null) spec decodes as the type's empty payload.
    pub fn decode_spec(&self, value: Value) -> Result<Spec, serde_yaml::Error> {
        let value = match value {
            Value::Null => Value::Mapping(Default::default()),
            v => v,
        };
        Ok(match self.gvk {
            gvk::POD => Spec::Pod(serde_yaml::from_value(value)?),
            gvk::DEPLOYMENT => Spec::Deployment(serde_yaml::from_value(value)?),
            gvk::NAMESPACE => Spec::Namespace(serde_yaml::from_value(value)?),
            gvk::SERVICE => Spec::Service(serde_yaml::from_value(value)?),
            gvk::VIRTUAL_SERVICE => Spec::VirtualService(serde_yaml::from_value(value)?),
            gvk::DESTINATION_RULE => Spec::DestinationRule(serde_yaml::from_value(value)?),
            gvk::GATEWAY => Spec::Gateway(serde_yaml::from_value(value)?),
            other => {
                return Err(serde::de::Error::custom(format!(
                    "no payload type registered for {}",
                    other
                )))
            }
        })
    }

    /// Whether `spec` is this schema's payload type.
    pub fn accepts(&self, spec: &Spec) -> bool {
        spec.gvk() == self.gvk
    }

    /// Whether a manifest with this `apiVersion` and `kind` is of this type.
    pub fn matches(&self, api_version: &str, kind: &str) -> bool {
        if kind != self.gvk.kind {
            return false;
        }
        let (group, version) = match api_version.rsplit_once('/') {
            Some((group, version)) => (group, version),
            None => ("", api_version),
        };
        group == self.gvk.group && self.versions.contains(&version)
    }
}

/// An ordered collection of schemas.
#[derive(Debug, Clone)]
pub struct Schemas {
    schemas: Vec<Schema>,
}

const ISTIO_NETWORKING_VERSIONS: &[&str] = &["v1alpha3", "v1beta1", "v1"];

static BUILTIN: LazyLock<Schemas> = LazyLock::new(|| {
    Schemas::new(vec![
        Schema {
            gvk: gvk::POD,
            plural: "pods",
            cluster_scoped: false,
            versions: &["v1"],
        },
        Schema {
            gvk: gvk::NAMESPACE,
            plural: "namespaces",
            cluster_scoped: true,
            versions: &["v1"],
        },
        Schema {
            gvk: gvk::SERVICE,
            plural: "services",
            cluster_scoped: false,
            versions: &["v1"],
        },
        Schema {
            gvk: gvk::DEPLOYMENT,
            plural: "deployments",
            cluster_scoped: false,
            versions: &["v1"],
        },
        Schema {
            gvk: gvk::VIRTUAL_SERVICE,
            plural: "virtualservices",
            cluster_scoped: false,
            versions: ISTIO_NETWORKING_VERSIONS,
        },
        Schema {
            gvk: gvk::DESTINATION_RULE,
            plural: "destinationrules",
            cluster_scoped: false,
            versions: ISTIO_NETWORKING_VERSIONS,
        },
        Schema {
            gvk: gvk::GATEWAY,
            plural: "gateways",
            cluster_scoped: false,
            versions: ISTIO_NETWORKING_VERSIONS,
        },
    ])
});

impl Schemas {
    /// Create a collection. Schemas are kept in GVK order.
    pub fn new(mut schemas: Vec<Schema>) -> Self {
        schemas.sort_by_key(|s| s.gvk);
        schemas.dedup_by_key(|s| s.gvk);
        Self { schemas }
    }

    /// The schemas for all builtin resource types.
    pub fn builtin() -> &'static Schemas {
        &BUILTIN
    }

    /// Find the schema for a canonical GVK.
    pub fn find_by_gvk(&self, gvk: &Gvk) -> Option<&Schema> {
        self.schemas
            .binary_search_by_key(gvk, |s| s.gvk)
            .ok()
            .map(|i| &self.schemas[i])
    }

    /// Find the schema for a manifest's `apiVersion` and `kind`.
    pub fn find_by_kind(&self, api_version: &str, kind: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.matches(api_version, kind))
    }

    /// Iterate over schemas in GVK order.
    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.iter()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
