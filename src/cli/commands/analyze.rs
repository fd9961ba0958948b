//! Analyze command implementation.
//!
//! The `meshlint analyze` command loads manifests, runs the analyzers, and
//! prints what they report.

use std::io::Write;

use tracing::debug;

use crate::analysis::{AnalysisDriver, AnalysisOptions, AnalyzerRegistry};
use crate::cli::args::AnalyzeArgs;
use crate::config::{Settings, SuppressionRule};
use crate::error::{MeshlintError, Result};
use crate::msg::Diagnostic;
use crate::output::{render, OutputFormat};
use crate::resource::{ClusterId, Namespace};
use crate::source::FileSource;

use super::dispatcher::Command;

/// Tag appended to documentation links in reports.
const DOC_REF: &str = "meshlint-analyze";

/// The analyze command implementation.
pub struct AnalyzeCommand {
    settings: Settings,
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    /// Create a new analyze command from loaded settings and CLI arguments.
    pub fn new(settings: Settings, args: AnalyzeArgs) -> Self {
        Self { settings, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AnalyzeArgs {
        &self.args
    }

    /// Settings with CLI flags applied on top.
    pub fn effective_settings(&self) -> Result<Settings> {
        let mut settings = self.settings.clone();
        if let Some(ns) = &self.args.namespace {
            settings.default_namespace = ns.clone();
        }
        if let Some(level) = self.args.output_threshold {
            settings.output_threshold = level;
        }
        if let Some(level) = self.args.failure_threshold {
            settings.failure_threshold = level;
        }
        if self.args.parallel {
            settings.parallel = true;
        }
        for raw in &self.args.suppress {
            settings.suppress.push(parse_suppression(raw)?);
        }
        Ok(settings)
    }
}

fn parse_suppression(raw: &str) -> Result<SuppressionRule> {
    match raw.split_once('=') {
        Some((code, resource)) if !code.trim().is_empty() => Ok(SuppressionRule {
            code: code.trim().to_string(),
            resource: resource.trim().to_string(),
        }),
        _ => Err(MeshlintError::CommandParse {
            message: format!("--suppress expects CODE=RESOURCE, got '{}'", raw),
        }),
    }
}

impl Command for AnalyzeCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let settings = self.effective_settings()?;
        debug!("Effective settings: {:?}", settings);

        let source = FileSource::new(Namespace::new(settings.default_namespace.as_str()))
            .with_cluster(ClusterId::new(settings.cluster.as_str()));
        let snapshot = source.load(&self.args.paths)?;

        let driver = AnalysisDriver::new(
            AnalyzerRegistry::with_builtins(),
            AnalysisOptions::from_settings(&settings)?,
        );
        let result = driver.run(&snapshot);
        let diagnostics: Vec<Diagnostic> = result
            .diagnostics
            .iter()
            .map(|d| Diagnostic {
                gvk: d.gvk,
                message: d.message.clone().with_doc_ref(DOC_REF),
            })
            .collect();

        if self.args.output == OutputFormat::Human && diagnostics.is_empty() {
            writeln!(
                out,
                "\u{2714} No validation issues found when analyzing {} resource(s).",
                snapshot.len()
            )?;
        } else {
            render(self.args.output, &diagnostics, out)?;
        }

        if let Some(failure) = result.failures.first() {
            return Err(MeshlintError::AnalyzerFailed {
                analyzer: failure.analyzer.to_string(),
                message: failure.error.clone(),
            });
        }

        let failing = result.count_at_least(settings.failure_threshold);
        if failing > 0 {
            return Err(MeshlintError::AnalyzerFoundIssues { count: failing });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::Level;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const VS: &str = r#"apiVersion: networking.istio.io/v1alpha3
kind: VirtualService
metadata:
  name: reviews
spec:
  hosts: [reviews]
  gateways: [missing]
"#;

    fn args(paths: Vec<PathBuf>) -> AnalyzeArgs {
        AnalyzeArgs {
            paths,
            output: OutputFormat::Human,
            suppress: Vec::new(),
            output_threshold: None,
            failure_threshold: None,
            namespace: None,
            parallel: false,
        }
    }

    fn run(settings: Settings, args: AnalyzeArgs) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = AnalyzeCommand::new(settings, args).execute(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn cli_flags_override_settings() {
        let mut a = args(vec![]);
        a.namespace = Some("bookinfo".into());
        a.failure_threshold = Some(Level::Warning);
        a.suppress = vec!["IST0101=VirtualService *".into()];
        a.parallel = true;

        let settings = AnalyzeCommand::new(Settings::default(), a)
            .effective_settings()
            .unwrap();
        assert_eq!(settings.default_namespace, "bookinfo");
        assert_eq!(settings.failure_threshold, Level::Warning);
        assert_eq!(settings.output_threshold, Level::Info);
        assert_eq!(settings.suppress[0].resource, "VirtualService *");
        assert!(settings.parallel);
    }

    #[test]
    fn malformed_suppression_is_usage_error() {
        let mut a = args(vec![]);
        a.suppress = vec!["IST0101".into()];
        let err = AnalyzeCommand::new(Settings::default(), a)
            .effective_settings()
            .unwrap_err();
        assert!(matches!(err, MeshlintError::CommandParse { .. }));
    }

    #[test]
    fn issues_fail_the_command() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("vs.yaml");
        fs::write(&file, VS).unwrap();

        let (result, out) = run(Settings::default(), args(vec![file]));
        assert!(matches!(
            result,
            Err(MeshlintError::AnalyzerFoundIssues { count: 1 })
        ));
        assert!(out.contains("Referenced gateway not found: \"missing\""));
    }

    #[test]
    fn clean_input_reports_no_issues() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("vs.yaml");
        fs::write(&file, VS.replace("[missing]", "[mesh]")).unwrap();

        let (result, out) = run(Settings::default(), args(vec![file]));
        assert!(result.is_ok());
        assert_eq!(
            out,
            "\u{2714} No validation issues found when analyzing 1 resource(s).\n"
        );
    }

    #[test]
    fn warnings_below_failure_threshold_pass() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("pod.yaml");
        fs::write(
            &file,
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\nspec:\n  securityContext:\n    runAsUser: 1337\n",
        )
        .unwrap();

        let (result, out) = run(Settings::default(), args(vec![file.clone()]));
        assert!(result.is_ok());
        assert!(out.contains("IST0144"));

        let mut strict = args(vec![file]);
        strict.failure_threshold = Some(Level::Warning);
        let (result, _) = run(Settings::default(), strict);
        assert!(matches!(result, Err(MeshlintError::AnalyzerFoundIssues { .. })));
    }

    #[test]
    fn unparsable_input_is_data_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bad.yaml");
        fs::write(&file, "kind: [").unwrap();

        let (result, _) = run(Settings::default(), args(vec![file]));
        assert!(matches!(result, Err(MeshlintError::FileParse { .. })));
    }
}
