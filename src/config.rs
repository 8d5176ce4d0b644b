//! Generation configuration.
//!
//! Earlier generations of this tool kept the output namespace in
//! process-global state initialized before the run. It is now an explicit
//! value threaded through symbol-table construction and the generator.

use std::sync::Arc;

/// Configuration for a generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Namespace (module path) the generated classes are placed under.
    pub output_namespace: Arc<str>,
}

impl GeneratorConfig {
    pub fn new(output_namespace: impl Into<Arc<str>>) -> Self {
        Self {
            output_namespace: output_namespace.into(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new("FHIR")
    }
}
