//! Typed payloads for the resource types meshlint understands.
//!
//! - [`workload`] - Pods and Deployments
//! - [`networking`] - VirtualServices, DestinationRules, Gateways
//! - [`corev1`] - Namespaces and Services

pub mod corev1;
pub mod networking;
pub mod workload;

pub use corev1::{NamespaceSpec, ServicePort, ServiceSpec};
pub use networking::{
    Destination, DestinationRule, Gateway, HttpMirrorPolicy, HttpRoute, RouteDestination,
    Subset, TcpRoute, TlsRoute, VirtualService,
};
pub use workload::{Container, DeploymentSpec, PodSecurityContext, PodSpec, SecurityContext};
