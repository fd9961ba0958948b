//! The closed set of resource payloads.
//!
//! Each [`Spec`] variant corresponds to exactly one [`Gvk`]. Payloads are
//! only ever built through [`Schema::decode_spec`](super::Schema::decode_spec),
//! so an instance's variant is fixed by its type, never by its content.

use super::gvk::{self, Gvk};
use crate::model::{
    DeploymentSpec, DestinationRule, Gateway, NamespaceSpec, PodSpec, ServiceSpec, VirtualService,
};

/// Type-specific payload of a resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Pod(PodSpec),
    Deployment(DeploymentSpec),
    Namespace(NamespaceSpec),
    Service(ServiceSpec),
    VirtualService(VirtualService),
    DestinationRule(DestinationRule),
    Gateway(Gateway),
}

impl Spec {
    /// The type this payload belongs to.
    pub fn gvk(&self) -> Gvk {
        match self {
            Spec::Pod(_) => gvk::POD,
            Spec::Deployment(_) => gvk::DEPLOYMENT,
            Spec::Namespace(_) => gvk::NAMESPACE,
            Spec::Service(_) => gvk::SERVICE,
            Spec::VirtualService(_) => gvk::VIRTUAL_SERVICE,
            Spec::DestinationRule(_) => gvk::DESTINATION_RULE,
            Spec::Gateway(_) => gvk::GATEWAY,
        }
    }

    pub fn as_pod(&self) -> Option<&PodSpec> {
        match self {
            Spec::Pod(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_deployment(&self) -> Option<&DeploymentSpec> {
        match self {
            Spec::Deployment(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&NamespaceSpec> {
        match self {
            Spec::Namespace(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_service(&self) -> Option<&ServiceSpec> {
        match self {
            Spec::Service(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_virtual_service(&self) -> Option<&VirtualService> {
        match self {
            Spec::VirtualService(vs) => Some(vs),
            _ => None,
        }
    }

    pub fn as_destination_rule(&self) -> Option<&DestinationRule> {
        match self {
            Spec::DestinationRule(dr) => Some(dr),
            _ => None,
        }
    }

    pub fn as_gateway(&self) -> Option<&Gateway> {
        match self {
            Spec::Gateway(gw) => Some(gw),
            _ => None,
        }
    }
}
