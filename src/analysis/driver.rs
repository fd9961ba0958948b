//! Running analyzers over a snapshot.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::analyzer::{Analyzer, AnalyzerError};
use super::context::AnalysisContext;
use super::registry::AnalyzerRegistry;
use super::snapshot::Snapshot;
use super::suppress::{is_suppressed, Suppression};
use crate::config::Settings;
use crate::error::{MeshlintError, Result};
use crate::msg::{Diagnostic, Level};

/// Knobs for one analysis pass.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Names of analyzers that never run.
    pub disabled_analyzers: Vec<String>,
    /// Run eligible analyzers on the rayon pool.
    pub parallel: bool,
    pub suppressions: Vec<Suppression>,
    /// Messages below this level are dropped.
    pub output_threshold: Level,
}

impl AnalysisOptions {
    /// Build options from settings, compiling suppression rules.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let suppressions = settings
            .suppress
            .iter()
            .map(|rule| {
                Suppression::new(rule.code.as_str(), &rule.resource).map_err(|e| {
                    MeshlintError::CommandParse {
                        message: format!("invalid suppression {}={}: {}", rule.code, rule.resource, e),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            disabled_analyzers: settings.disabled_analyzers.clone(),
            parallel: settings.parallel,
            suppressions,
            output_threshold: settings.output_threshold,
        })
    }
}

/// An analyzer that aborted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerFailure {
    pub analyzer: &'static str,
    pub error: String,
}

/// Outcome of a pass.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    /// Reported messages, sorted by resource, code, detail, then line.
    pub diagnostics: Vec<Diagnostic>,
    /// Analyzers that ran, in registration order.
    pub executed: Vec<&'static str>,
    /// Analyzers that were disabled or had no inputs.
    pub skipped: Vec<&'static str>,
    pub failures: Vec<AnalyzerFailure>,
    /// Messages dropped by suppression rules.
    pub suppressed: usize,
}

impl AnalysisResult {
    /// Number of messages at or above `level`.
    pub fn count_at_least(&self, level: Level) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.message.level() >= level)
            .count()
    }
}

struct Outcome {
    name: &'static str,
    diagnostics: Vec<Diagnostic>,
    error: Option<AnalyzerError>,
}

/// Runs the registered analyzers.
pub struct AnalysisDriver {
    registry: AnalyzerRegistry,
    options: AnalysisOptions,
}

impl AnalysisDriver {
    pub fn new(registry: AnalyzerRegistry, options: AnalysisOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &AnalyzerRegistry {
        &self.registry
    }

    /// Analyze `snapshot`.
    ///
    /// An analyzer runs when it is not disabled and at least one of its
    /// input types is present. A failing analyzer keeps the messages it
    /// reported before failing and does not stop the others.
    pub fn run(&self, snapshot: &Snapshot) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        let mut eligible: Vec<&dyn Analyzer> = Vec::new();

        for analyzer in self.registry.iter() {
            let meta = analyzer.metadata();
            if self.options.disabled_analyzers.iter().any(|d| d == meta.name) {
                debug!("Skipping disabled analyzer {}", meta.name);
                result.skipped.push(meta.name);
            } else if !meta.inputs.iter().any(|g| snapshot.contains(g)) {
                debug!("Skipping analyzer {}: no input resources", meta.name);
                result.skipped.push(meta.name);
            } else {
                eligible.push(analyzer);
            }
        }

        info!(
            "Running {} analyzer(s) over {} resource(s)",
            eligible.len(),
            snapshot.len()
        );

        let outcomes: Vec<Outcome> = if self.options.parallel {
            eligible
                .par_iter()
                .map(|a| run_analyzer(*a, snapshot))
                .collect()
        } else {
            eligible
                .iter()
                .map(|a| run_analyzer(*a, snapshot))
                .collect()
        };

        for outcome in outcomes {
            result.executed.push(outcome.name);
            if let Some(error) = outcome.error {
                warn!("Analyzer {} failed: {}", outcome.name, error);
                result.failures.push(AnalyzerFailure {
                    analyzer: outcome.name,
                    error: error.to_string(),
                });
            }
            for diagnostic in outcome.diagnostics {
                if diagnostic.message.level() < self.options.output_threshold {
                    continue;
                }
                if is_suppressed(&self.options.suppressions, &diagnostic.message) {
                    result.suppressed += 1;
                    continue;
                }
                result.diagnostics.push(diagnostic);
            }
        }

        result
            .diagnostics
            .sort_by_cached_key(|d| d.message.sort_key());
        debug!(
            "Analysis produced {} message(s), {} suppressed",
            result.diagnostics.len(),
            result.suppressed
        );
        result
    }
}

fn run_analyzer(analyzer: &dyn Analyzer, snapshot: &Snapshot) -> Outcome {
    let name = analyzer.metadata().name;
    debug!("Running analyzer {}", name);
    let ctx = AnalysisContext::new(snapshot);
    let error = analyzer.analyze(&ctx).err();
    Outcome {
        name,
        diagnostics: ctx.into_diagnostics(),
        error,
    }
}
