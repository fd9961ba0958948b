//! Configuration analysis.
//!
//! A [`Snapshot`] holds every resource of a pass. The [`AnalysisDriver`]
//! gives each eligible [`Analyzer`] its own [`AnalysisContext`] over the
//! snapshot, collects what they report, and returns an ordered
//! [`AnalysisResult`].
//!
//! ```
//! use std::path::Path;
//! use meshlint::analysis::{AnalysisDriver, AnalysisOptions, AnalyzerRegistry, Snapshot};
//! use meshlint::source::FileSource;
//!
//! let manifest = r#"
//! apiVersion: networking.istio.io/v1alpha3
//! kind: VirtualService
//! metadata:
//!   name: reviews
//! spec:
//!   gateways: [missing]
//! "#;
//! let mut snapshot = Snapshot::new();
//! FileSource::default().load_str(manifest, Path::new("vs.yaml"), &mut snapshot).unwrap();
//!
//! let driver = AnalysisDriver::new(AnalyzerRegistry::with_builtins(), AnalysisOptions::default());
//! let result = driver.run(&snapshot);
//! assert_eq!(result.diagnostics.len(), 1);
//! assert_eq!(result.diagnostics[0].message.code(), "IST0101");
//! ```

mod analyzer;
pub mod analyzers;
mod context;
mod driver;
mod registry;
mod snapshot;
mod suppress;

pub use analyzer::{Analyzer, AnalyzerError, AnalyzerMetadata};
pub use context::{AnalysisContext, Context};
pub use driver::{AnalysisDriver, AnalysisOptions, AnalysisResult, AnalyzerFailure};
pub use registry::AnalyzerRegistry;
pub use snapshot::Snapshot;
pub use suppress::{is_suppressed, Suppression};
