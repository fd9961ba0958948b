//! Origin for Kubernetes-style resources read from files or a cluster.

use crate::resource::{gvk, ClusterId, FieldsMap, FullName, Gvk, Namespace, Origin, Reference, Version};

use super::position::Position;

/// Kubernetes-specific [`Origin`].
#[derive(Debug, Clone, PartialEq)]
pub struct KubeOrigin {
    pub gvk: Gvk,
    pub full_name: FullName,
    pub resource_version: Version,
    pub reference: Option<Position>,
    pub fields_map: FieldsMap,
    pub cluster: ClusterId,
}

impl KubeOrigin {
    pub fn new(gvk: Gvk, full_name: FullName) -> Self {
        Self {
            gvk,
            full_name,
            resource_version: Version::default(),
            reference: None,
            fields_map: FieldsMap::new(),
            cluster: ClusterId::default(),
        }
    }

    pub fn with_reference(mut self, reference: Position) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_fields_map(mut self, fields_map: FieldsMap) -> Self {
        self.fields_map = fields_map;
        self
    }

    pub fn with_cluster(mut self, cluster: ClusterId) -> Self {
        self.cluster = cluster;
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.resource_version = version;
        self
    }
}

impl Origin for KubeOrigin {
    // The convention is `<kind> [<namespace>/]<name>`; the namespace is
    // always shown when there is one.
    fn friendly_name(&self) -> String {
        format!("{} {}", self.gvk.kind, self.full_name)
    }

    fn comparator(&self) -> String {
        format!(
            "{}/{}/{}",
            self.gvk.kind,
            self.full_name.name,
            self.full_name.namespace
        )
    }

    fn namespace(&self) -> Namespace {
        // A Namespace resource's own name is its namespace.
        if self.gvk == gvk::NAMESPACE {
            return Namespace::new(self.full_name.name.as_str());
        }
        self.full_name.namespace.clone()
    }

    fn reference(&self) -> Option<&dyn Reference> {
        self.reference.as_ref().map(|p| p as &dyn Reference)
    }

    fn field_map(&self) -> &FieldsMap {
        &self.fields_map
    }

    fn cluster_name(&self) -> &ClusterId {
        &self.cluster
    }
}
