//! Workloads must not run as the proxy's UID.

use super::util::{is_control_plane, is_exempt_container, RESERVED_UID};
use crate::analysis::{Analyzer, AnalyzerError, AnalyzerMetadata, Context};
use crate::model::PodSpec;
use crate::msg;
use crate::resource::{gvk, Gvk, Instance};

const NAME: &str = "applicationUID.Analyzer";

/// Reports Pods and Deployments whose workload runs as UID 1337.
///
/// The pod-level `runAsUser` and that of every container or init container
/// other than the proxy and operator count. Control-plane workloads are skipped. A
/// resource is reported at most once.
pub struct ApplicationUidAnalyzer;

impl ApplicationUidAnalyzer {
    fn check(&self, ctx: &dyn Context, instance: &Instance, pod: &PodSpec, gvk: Gvk) {
        if is_control_plane(&instance.metadata.labels) {
            return;
        }
        let pod_level = pod.run_as_user() == Some(RESERVED_UID);
        let container_level = pod
            .containers
            .iter()
            .chain(&pod.init_containers)
            .filter(|c| !is_exempt_container(&c.name))
            .any(|c| c.run_as_user() == Some(RESERVED_UID));

        if pod_level || container_level {
            ctx.report(gvk, msg::invalid_application_uid(instance.origin.clone()));
        }
    }
}

impl Analyzer for ApplicationUidAnalyzer {
    fn metadata(&self) -> AnalyzerMetadata {
        AnalyzerMetadata {
            name: NAME,
            description: "Checks invalid application UID",
            inputs: vec![gvk::POD, gvk::DEPLOYMENT],
        }
    }

    fn analyze(&self, ctx: &dyn Context) -> Result<(), AnalyzerError> {
        ctx.try_for_each(gvk::POD, &mut |r| {
            let pod = r.message.as_pod().ok_or_else(|| mismatch(gvk::POD, r))?;
            self.check(ctx, r, pod, gvk::POD);
            Ok(true)
        })?;
        ctx.try_for_each(gvk::DEPLOYMENT, &mut |r| {
            let deployment = r
                .message
                .as_deployment()
                .ok_or_else(|| mismatch(gvk::DEPLOYMENT, r))?;
            self.check(ctx, r, &deployment.template.spec, gvk::DEPLOYMENT);
            Ok(true)
        })
    }
}

fn mismatch(expected: Gvk, instance: &Instance) -> AnalyzerError {
    AnalyzerError::PayloadMismatch {
        analyzer: NAME,
        expected,
        resource: instance.full_name().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{instance, run};
    use crate::msg::INVALID_APPLICATION_UID;

    const POD_AS_PROXY_UID: &str = r#"
containers:
  - name: app
    securityContext:
      runAsUser: 1337
  - name: helper
    securityContext:
      runAsUser: 1337
"#;

    #[test]
    fn reports_container_running_as_reserved_uid_once() {
        let messages = run(
            &ApplicationUidAnalyzer,
            vec![instance(gvk::POD, "default", "web", POD_AS_PROXY_UID)],
        );
        assert_eq!(messages.len(), 1);
        assert!(std::ptr::eq(
            messages[0].message.message_type,
            &INVALID_APPLICATION_UID
        ));
        assert_eq!(messages[0].message.resource_name(), "Pod default/web");
    }

    #[test]
    fn reports_pod_level_uid() {
        let spec = "securityContext:\n  runAsUser: 1337\ncontainers:\n  - name: app\n";
        let messages = run(
            &ApplicationUidAnalyzer,
            vec![instance(gvk::POD, "default", "web", spec)],
        );
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn exempt_containers_are_ignored() {
        let spec = r#"
containers:
  - name: app
  - name: istio-proxy
    securityContext:
      runAsUser: 1337
  - name: istio-operator
    securityContext:
      runAsUser: 1337
"#;
        let messages = run(
            &ApplicationUidAnalyzer,
            vec![instance(gvk::POD, "default", "web", spec)],
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn init_container_uid_is_reported() {
        let spec = r#"
initContainers:
  - name: migrate
    securityContext:
      runAsUser: 1337
  - name: istio-proxy
    securityContext:
      runAsUser: 1337
containers:
  - name: app
"#;
        let messages = run(
            &ApplicationUidAnalyzer,
            vec![instance(gvk::POD, "default", "web", spec)],
        );
        assert_eq!(messages.len(), 1);

        let exempt_only = spec.replace("name: migrate", "name: istio-operator");
        let messages = run(
            &ApplicationUidAnalyzer,
            vec![instance(gvk::POD, "default", "web", &exempt_only)],
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn other_uids_pass() {
        let spec = "containers:\n  - name: app\n    securityContext:\n      runAsUser: 1000\n";
        let messages = run(
            &ApplicationUidAnalyzer,
            vec![instance(gvk::POD, "default", "web", spec)],
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn checks_deployment_template() {
        let spec = r#"
template:
  spec:
    containers:
      - name: app
        securityContext:
          runAsUser: 1337
"#;
        let messages = run(
            &ApplicationUidAnalyzer,
            vec![instance(gvk::DEPLOYMENT, "default", "web", spec)],
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].gvk, gvk::DEPLOYMENT);
        assert_eq!(messages[0].message.resource_name(), "Deployment default/web");
    }

    #[test]
    fn control_plane_is_skipped() {
        let mut pilot = instance(gvk::POD, "istio-system", "istiod", POD_AS_PROXY_UID);
        pilot
            .metadata
            .labels
            .insert("istio".to_string(), "pilot".to_string());
        let messages = run(&ApplicationUidAnalyzer, vec![pilot]);
        assert!(messages.is_empty());
    }
}
