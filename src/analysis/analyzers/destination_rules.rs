//! VirtualService destinations must name a subset some DestinationRule defines.

use std::collections::HashSet;

use super::util::{field_line, paths, resolve_host};
use crate::analysis::{Analyzer, AnalyzerError, AnalyzerMetadata, Context};
use crate::model::{Destination, VirtualService};
use crate::msg;
use crate::resource::{gvk, FullName, Instance};

const NAME: &str = "virtualservice.DestinationRuleAnalyzer";

const ROUTE_DESCRIPTOR: &str = "host+subset in destinationrule";
const MIRROR_DESCRIPTOR: &str = "mirror+subset in destinationrule";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HostAndSubset {
    host: FullName,
    subset: String,
}

/// Checks route and mirror destinations against DestinationRule subsets.
pub struct DestinationRuleAnalyzer;

impl DestinationRuleAnalyzer {
    fn subset_index(&self, ctx: &dyn Context) -> Result<HashSet<HostAndSubset>, AnalyzerError> {
        let mut index = HashSet::new();
        ctx.try_for_each(gvk::DESTINATION_RULE, &mut |r| {
            let rule = r.message.as_destination_rule().ok_or_else(|| {
                AnalyzerError::PayloadMismatch {
                    analyzer: NAME,
                    expected: gvk::DESTINATION_RULE,
                    resource: r.full_name().clone(),
                }
            })?;
            let host = resolve_host(&r.full_name().namespace, &rule.host);
            for subset in &rule.subsets {
                index.insert(HostAndSubset {
                    host: host.clone(),
                    subset: subset.name.clone(),
                });
            }
            Ok(true)
        })?;
        Ok(index)
    }

    fn check_virtual_service(
        &self,
        ctx: &dyn Context,
        index: &HashSet<HostAndSubset>,
        instance: &Instance,
        vs: &VirtualService,
    ) {
        for (destination, path) in route_destinations(vs) {
            self.check_destination(ctx, index, instance, destination, &path, ROUTE_DESCRIPTOR);
        }
        for (destination, path) in mirror_destinations(vs) {
            self.check_destination(ctx, index, instance, destination, &path, MIRROR_DESCRIPTOR);
        }
    }

    fn check_destination(
        &self,
        ctx: &dyn Context,
        index: &HashSet<HostAndSubset>,
        instance: &Instance,
        destination: &Destination,
        path: &str,
        descriptor: &str,
    ) {
        if destination.subset.is_empty() {
            return;
        }
        let key = HostAndSubset {
            host: resolve_host(&instance.full_name().namespace, &destination.host),
            subset: destination.subset.clone(),
        };
        if index.contains(&key) {
            return;
        }

        let mut message = msg::referenced_resource_not_found(
            instance.origin.clone(),
            descriptor,
            format!("{}+{}", destination.host, destination.subset),
        );
        if let Some(line) = field_line(instance.origin.as_ref(), path) {
            message = message.with_line(line);
        }
        ctx.report(gvk::VIRTUAL_SERVICE, message);
    }
}

impl Analyzer for DestinationRuleAnalyzer {
    fn metadata(&self) -> AnalyzerMetadata {
        AnalyzerMetadata {
            name: NAME,
            description: "Checks the destination rules associated with each virtual service",
            inputs: vec![gvk::VIRTUAL_SERVICE, gvk::DESTINATION_RULE],
        }
    }

    fn analyze(&self, ctx: &dyn Context) -> Result<(), AnalyzerError> {
        let index = self.subset_index(ctx)?;
        ctx.try_for_each(gvk::VIRTUAL_SERVICE, &mut |r| {
            let vs = r
                .message
                .as_virtual_service()
                .ok_or_else(|| AnalyzerError::PayloadMismatch {
                    analyzer: NAME,
                    expected: gvk::VIRTUAL_SERVICE,
                    resource: r.full_name().clone(),
                })?;
            self.check_virtual_service(ctx, &index, r, vs);
            Ok(true)
        })
    }
}

/// Route destinations with the field path of their host.
fn route_destinations(vs: &VirtualService) -> Vec<(&Destination, String)> {
    let http = vs.http.iter().map(|r| r.route.as_slice());
    let tcp = vs.tcp.iter().map(|r| r.route.as_slice());
    let tls = vs.tls.iter().map(|r| r.route.as_slice());

    let mut out = Vec::new();
    for (section, rules) in [
        ("http", http.collect::<Vec<_>>()),
        ("tcp", tcp.collect()),
        ("tls", tls.collect()),
    ] {
        for (i, routes) in rules.into_iter().enumerate() {
            for (j, route) in routes.iter().enumerate() {
                out.push((&route.destination, paths::route_host(section, i, j)));
            }
        }
    }
    out
}

fn mirror_destinations(vs: &VirtualService) -> Vec<(&Destination, String)> {
    let mut out = Vec::new();
    for (i, rule) in vs.http.iter().enumerate() {
        if let Some(mirror) = &rule.mirror {
            out.push((mirror, paths::mirror_host(i)));
        }
        for (j, policy) in rule.mirrors.iter().enumerate() {
            out.push((&policy.destination, paths::mirrors_host(i, j)));
        }
    }
    out
}
