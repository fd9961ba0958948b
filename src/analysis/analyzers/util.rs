//! Helpers shared by the builtin analyzers.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::resource::{FullName, Namespace, Origin};

/// UID the sidecar proxy runs as.
pub const RESERVED_UID: i64 = 1337;

pub const PROXY_CONTAINER: &str = "istio-proxy";
pub const OPERATOR_CONTAINER: &str = "istio-operator";

/// Gateway name that stands for all sidecars in the mesh.
pub const MESH_GATEWAY: &str = "mesh";

/// Containers owned by the mesh itself.
pub fn is_exempt_container(name: &str) -> bool {
    name == PROXY_CONTAINER || name == OPERATOR_CONTAINER
}

/// Whether the labels mark a control-plane component.
pub fn is_control_plane(labels: &BTreeMap<String, String>) -> bool {
    labels.contains_key("istio") || labels.get("release").is_some_and(|r| r == "istio")
}

/// In-cluster service FQDN: `name.namespace.svc.cluster.local`.
static FQDN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+)\.(.+)\.svc\.cluster\.local$").expect("FQDN_REGEX must compile")
});

/// Resolve a service host to the name of the service it designates.
///
/// Only `name.namespace.svc.cluster.local` carries its own namespace. Any
/// other host is kept whole and placed relative to `namespace`.
pub fn resolve_host(namespace: &Namespace, host: &str) -> FullName {
    if let Some(caps) = FQDN_REGEX.captures(host) {
        return FullName::new(&caps[2], &caps[1]);
    }
    FullName::short_or_full(namespace, host)
}

/// The recorded line of `path`, if the origin tracks it.
pub fn field_line(origin: &dyn Origin, path: &str) -> Option<usize> {
    origin.field_map().get(path).copied()
}

/// Field paths into a VirtualService.
pub mod paths {
    pub fn route_host(section: &str, rule: usize, route: usize) -> String {
        format!("spec.{}[{}].route[{}].destination.host", section, rule, route)
    }

    pub fn mirror_host(rule: usize) -> String {
        format!("spec.http[{}].mirror.host", rule)
    }

    pub fn mirrors_host(rule: usize, mirror: usize) -> String {
        format!("spec.http[{}].mirrors[{}].destination.host", rule, mirror)
    }

    pub fn gateway(index: usize) -> String {
        format!("spec.gateways[{}]", index)
    }
}
