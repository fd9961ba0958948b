//! The view analyzers read from and report through.

use std::cell::RefCell;

use super::analyzer::AnalyzerError;
use super::snapshot::Snapshot;
use crate::msg::{Diagnostic, Message};
use crate::resource::{FullName, Gvk, Instance};

/// Read-only access to a snapshot plus a diagnostic sink.
pub trait Context {
    /// Visit every instance of `gvk` in insertion order until `visit`
    /// returns `false`.
    fn for_each(&self, gvk: Gvk, visit: &mut dyn FnMut(&Instance) -> bool);

    /// Record a diagnostic for a resource of type `gvk`.
    fn report(&self, gvk: Gvk, message: Message);

    /// Look up an instance by name.
    fn find(&self, gvk: Gvk, name: &FullName) -> Option<&Instance>;

    fn exists(&self, gvk: Gvk, name: &FullName) -> bool {
        self.find(gvk, name).is_some()
    }

    /// Like [`Context::for_each`], stopping at the first error.
    fn try_for_each(
        &self,
        gvk: Gvk,
        visit: &mut dyn FnMut(&Instance) -> Result<bool, AnalyzerError>,
    ) -> Result<(), AnalyzerError> {
        let mut outcome = Ok(());
        self.for_each(gvk, &mut |instance| match visit(instance) {
            Ok(more) => more,
            Err(e) => {
                outcome = Err(e);
                false
            }
        });
        outcome
    }
}

/// [`Context`] for a single analyzer run.
///
/// Each analyzer gets its own context so that runs never share a sink.
#[derive(Debug)]
pub struct AnalysisContext<'a> {
    snapshot: &'a Snapshot,
    sink: RefCell<Vec<Diagnostic>>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            sink: RefCell::new(Vec::new()),
        }
    }

    /// Diagnostics in the order they were reported.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.sink.into_inner()
    }
}

impl Context for AnalysisContext<'_> {
    fn for_each(&self, gvk: Gvk, visit: &mut dyn FnMut(&Instance) -> bool) {
        for instance in self.snapshot.instances(&gvk) {
            if !visit(instance) {
                break;
            }
        }
    }

    fn report(&self, gvk: Gvk, message: Message) {
        self.sink.borrow_mut().push(Diagnostic { gvk, message });
    }

    fn find(&self, gvk: Gvk, name: &FullName) -> Option<&Instance> {
        self.snapshot.find(&gvk, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::invalid_application_uid;
    use crate::resource::{gvk, ConfigRecord, ObjectMetadata, Schemas};
    use crate::source::SyntheticOrigin;
    use std::sync::Arc;

    fn snapshot_with_pods(names: &[&str]) -> Snapshot {
        let schema = Schemas::builtin().find_by_gvk(&gvk::POD).unwrap();
        let mut snapshot = Snapshot::new();
        for name in names {
            let record = ConfigRecord {
                meta: ObjectMetadata {
                    name: name.to_string(),
                    namespace: "default".into(),
                    ..Default::default()
                },
                spec: serde_yaml::Value::Null,
            };
            let origin = Arc::new(SyntheticOrigin::new(gvk::POD, FullName::new("default", *name)));
            snapshot
                .insert(Instance::from_config(&record, schema, origin).unwrap())
                .unwrap();
        }
        snapshot
    }

    #[test]
    fn for_each_visits_in_order_and_stops() {
        let snapshot = snapshot_with_pods(&["a", "b", "c"]);
        let ctx = AnalysisContext::new(&snapshot);

        let mut seen = Vec::new();
        ctx.for_each(gvk::POD, &mut |i| {
            seen.push(i.full_name().name.to_string());
            seen.len() < 2
        });
        assert_eq!(seen, ["a", "b"]);
    }

    #[test]
    fn for_each_on_absent_type_visits_nothing() {
        let snapshot = snapshot_with_pods(&["a"]);
        let ctx = AnalysisContext::new(&snapshot);
        let mut visits = 0;
        ctx.for_each(gvk::GATEWAY, &mut |_| {
            visits += 1;
            true
        });
        assert_eq!(visits, 0);
    }

    #[test]
    fn report_inside_for_each_is_collected() {
        let snapshot = snapshot_with_pods(&["a", "b"]);
        let ctx = AnalysisContext::new(&snapshot);
        ctx.for_each(gvk::POD, &mut |i| {
            ctx.report(gvk::POD, invalid_application_uid(i.origin.clone()));
            true
        });
        let diagnostics = ctx.into_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].gvk, gvk::POD);
    }

    #[test]
    fn try_for_each_stops_at_first_error() {
        let snapshot = snapshot_with_pods(&["a", "b"]);
        let ctx = AnalysisContext::new(&snapshot);
        let mut visits = 0;
        let result = ctx.try_for_each(gvk::POD, &mut |i| {
            visits += 1;
            Err(AnalyzerError::PayloadMismatch {
                analyzer: "test",
                expected: gvk::GATEWAY,
                resource: i.full_name().clone(),
            })
        });
        assert!(result.is_err());
        assert_eq!(visits, 1);
    }

    #[test]
    fn find_and_exists() {
        let snapshot = snapshot_with_pods(&["a"]);
        let ctx = AnalysisContext::new(&snapshot);
        assert!(ctx.exists(gvk::POD, &FullName::new("default", "a")));
        assert!(!ctx.exists(gvk::POD, &FullName::new("other", "a")));
    }
}
