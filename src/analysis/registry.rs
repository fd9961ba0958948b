//! Analyzer registry.
//!
//! The [`AnalyzerRegistry`] stores the available analyzers in registration
//! order and provides methods for registering, retrieving, and iterating
//! over them.

use super::analyzer::Analyzer;
use super::analyzers::{ApplicationUidAnalyzer, DestinationRuleAnalyzer, GatewayAnalyzer};

/// Registry of analyzers.
pub struct AnalyzerRegistry {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            analyzers: Vec::new(),
        }
    }

    /// Create a registry with all builtin analyzers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ApplicationUidAnalyzer));
        registry.register(Box::new(DestinationRuleAnalyzer));
        registry.register(Box::new(GatewayAnalyzer));
        registry
    }

    /// Register an analyzer, replacing any registered under the same name.
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) {
        let name = analyzer.metadata().name;
        match self
            .analyzers
            .iter()
            .position(|a| a.metadata().name == name)
        {
            Some(i) => self.analyzers[i] = analyzer,
            None => self.analyzers.push(analyzer),
        }
    }

    /// Get an analyzer by name.
    pub fn get(&self, name: &str) -> Option<&dyn Analyzer> {
        self.iter().find(|a| a.metadata().name == name)
    }

    /// Iterate over analyzers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Analyzer> {
        self.analyzers.iter().map(|a| a.as_ref())
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalyzerError, AnalyzerMetadata, Context};
    use crate::resource::gvk;

    struct MockAnalyzer {
        name: &'static str,
        description: &'static str,
    }

    impl Analyzer for MockAnalyzer {
        fn metadata(&self) -> AnalyzerMetadata {
            AnalyzerMetadata {
                name: self.name,
                description: self.description,
                inputs: vec![gvk::POD],
            }
        }

        fn analyze(&self, _ctx: &dyn Context) -> Result<(), AnalyzerError> {
            Ok(())
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = AnalyzerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(Box::new(MockAnalyzer {
            name: "mock.Analyzer",
            description: "first",
        }));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("mock.Analyzer").is_some());
        assert!(registry.get("other.Analyzer").is_none());
    }

    #[test]
    fn registering_same_name_replaces() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(Box::new(MockAnalyzer {
            name: "mock.Analyzer",
            description: "first",
        }));
        registry.register(Box::new(MockAnalyzer {
            name: "mock.Analyzer",
            description: "second",
        }));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("mock.Analyzer").unwrap().metadata().description,
            "second"
        );
    }

    #[test]
    fn builtins_are_registered_in_order() {
        let registry = AnalyzerRegistry::with_builtins();
        let names: Vec<_> = registry.iter().map(|a| a.metadata().name).collect();
        assert_eq!(
            names,
            [
                "applicationUID.Analyzer",
                "virtualservice.DestinationRuleAnalyzer",
                "virtualservice.GatewayAnalyzer",
            ]
        );
    }

    #[test]
    fn builtin_names_are_unique() {
        let registry = AnalyzerRegistry::with_builtins();
        let mut names: Vec<_> = registry.iter().map(|a| a.metadata().name).collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }
}
