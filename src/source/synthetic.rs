//! Origin for resources built in memory.

use crate::resource::{gvk, ClusterId, FieldsMap, FullName, Gvk, Namespace, Origin, Reference};

/// An [`Origin`] with no backing source: no reference and no field lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticOrigin {
    gvk: Gvk,
    full_name: FullName,
    cluster: ClusterId,
    fields: FieldsMap,
}

impl SyntheticOrigin {
    pub fn new(gvk: Gvk, full_name: FullName) -> Self {
        Self {
            gvk,
            full_name,
            cluster: ClusterId::default(),
            fields: FieldsMap::new(),
        }
    }

    pub fn with_cluster(mut self, cluster: ClusterId) -> Self {
        self.cluster = cluster;
        self
    }
}

impl Origin for SyntheticOrigin {
    fn friendly_name(&self) -> String {
        format!("{} {}", self.gvk.kind, self.full_name)
    }

    fn comparator(&self) -> String {
        format!(
            "{}/{}/{}",
            self.gvk.kind, self.full_name.name, self.full_name.namespace
        )
    }

    fn namespace(&self) -> Namespace {
        if self.gvk == gvk::NAMESPACE {
            return Namespace::new(self.full_name.name.as_str());
        }
        self.full_name.namespace.clone()
    }

    fn reference(&self) -> Option<&dyn Reference> {
        None
    }

    fn field_map(&self) -> &FieldsMap {
        &self.fields
    }

    fn cluster_name(&self) -> &ClusterId {
        &self.cluster
    }
}
