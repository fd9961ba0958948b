//! VirtualServices must bind to gateways that exist.

use super::util::{field_line, paths, MESH_GATEWAY};
use crate::analysis::{Analyzer, AnalyzerError, AnalyzerMetadata, Context};
use crate::msg;
use crate::resource::{gvk, FullName};

const NAME: &str = "virtualservice.GatewayAnalyzer";

/// Checks the gateways named by each VirtualService.
///
/// Short names resolve in the VirtualService's namespace; `ns/name` names
/// are taken as written. The reserved `mesh` gateway always exists.
pub struct GatewayAnalyzer;

impl Analyzer for GatewayAnalyzer {
    fn metadata(&self) -> AnalyzerMetadata {
        AnalyzerMetadata {
            name: NAME,
            description: "Checks the gateways associated with each virtual service",
            inputs: vec![gvk::GATEWAY, gvk::VIRTUAL_SERVICE],
        }
    }

    fn analyze(&self, ctx: &dyn Context) -> Result<(), AnalyzerError> {
        ctx.try_for_each(gvk::VIRTUAL_SERVICE, &mut |r| {
            let vs = r
                .message
                .as_virtual_service()
                .ok_or_else(|| AnalyzerError::PayloadMismatch {
                    analyzer: NAME,
                    expected: gvk::VIRTUAL_SERVICE,
                    resource: r.full_name().clone(),
                })?;

            let namespace = &r.full_name().namespace;
            for (i, gateway) in vs.gateways.iter().enumerate() {
                if gateway == MESH_GATEWAY {
                    continue;
                }
                let name = FullName::short_or_full(namespace, gateway);
                if ctx.exists(gvk::GATEWAY, &name) {
                    continue;
                }
                let mut message =
                    msg::referenced_resource_not_found(r.origin.clone(), "gateway", gateway.as_str());
                if let Some(line) = field_line(r.origin.as_ref(), &paths::gateway(i)) {
                    message = message.with_line(line);
                }
                ctx.report(gvk::VIRTUAL_SERVICE, message);
            }
            Ok(true)
        })
    }
}
