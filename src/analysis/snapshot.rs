//! Immutable resource snapshot.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::error::{MeshlintError, Result};
use crate::resource::{ClusterId, FullName, Gvk, Instance};

/// All resources of one analysis pass, grouped by type.
///
/// Instances of a type are kept in insertion order. A snapshot is fully
/// built before analysis starts and is only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    resources: BTreeMap<Gvk, Vec<Arc<Instance>>>,
    keys: HashSet<(Gvk, ClusterId, FullName)>,
    // First instance inserted under each name, across clusters.
    by_name: HashMap<(Gvk, FullName), Arc<Instance>>,
    len: usize,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance.
    ///
    /// Fails if an instance of the same type and cluster already has this
    /// name.
    pub fn insert(&mut self, instance: Instance) -> Result<()> {
        let gvk = instance.gvk();
        let name = instance.full_name().clone();
        let cluster = instance.origin.cluster_name().clone();

        if !self.keys.insert((gvk, cluster, name.clone())) {
            return Err(MeshlintError::DuplicateResource { gvk, name });
        }

        let instance = Arc::new(instance);
        self.by_name
            .entry((gvk, name))
            .or_insert_with(|| Arc::clone(&instance));
        self.resources.entry(gvk).or_default().push(instance);
        self.len += 1;
        Ok(())
    }

    /// Instances of `gvk` in insertion order.
    pub fn instances(&self, gvk: &Gvk) -> &[Arc<Instance>] {
        self.resources.get(gvk).map(Vec::as_slice).unwrap_or_default()
    }

    /// Look an instance up by name.
    pub fn find(&self, gvk: &Gvk, name: &FullName) -> Option<&Instance> {
        self.by_name
            .get(&(*gvk, name.clone()))
            .map(|i| i.as_ref())
    }

    /// Whether any instance of `gvk` is loaded.
    pub fn contains(&self, gvk: &Gvk) -> bool {
        !self.instances(gvk).is_empty()
    }

    /// Types with at least one instance, in GVK order.
    pub fn gvks(&self) -> impl Iterator<Item = Gvk> + '_ {
        self.resources
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(g, _)| *g)
    }

    /// All instances, grouped by type in GVK order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Instance>> {
        self.resources.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
